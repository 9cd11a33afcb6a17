use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::protocol::Message;
use crate::transport::Transport;

/// Default timeout for a single send or receive. A waiting node's receive
/// spans the opponent's whole turn, so this doubles as a move clock.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Largest frame body accepted in either direction.
pub const MAX_MESSAGE_SIZE: u32 = 64 * 1024;

/// Length-prefixed bincode frames over a TCP stream: a big-endian `u32`
/// body length followed by the body.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
    max_message_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self::with_config(stream, DEFAULT_TIMEOUT, MAX_MESSAGE_SIZE)
    }

    pub fn with_config(stream: TcpStream, timeout_duration: Duration, max_message_size: u32) -> Self {
        Self {
            stream,
            timeout_duration,
            max_message_size,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

fn io_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        std::io::ErrorKind::UnexpectedEof
        | std::io::ErrorKind::BrokenPipe
        | std::io::ErrorKind::ConnectionReset => anyhow::anyhow!("Connection closed by peer"),
        _ => anyhow::anyhow!("I/O error: {}", e),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let data = bincode::serialize(&msg)
            .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
        if data.len() as u64 > self.max_message_size as u64 {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                data.len(),
                self.max_message_size
            ));
        }

        let limit = self.timeout_duration;
        let stream = &mut self.stream;
        let send_op = async {
            let len = (data.len() as u32).to_be_bytes();
            stream.write_all(&len).await.map_err(io_error)?;
            stream.write_all(&data).await.map_err(io_error)?;
            anyhow::Ok(())
        };
        timeout(limit, send_op)
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", limit))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let (limit, max) = (self.timeout_duration, self.max_message_size);
        let stream = &mut self.stream;
        let recv_op = async {
            let mut len_buf = [0u8; 4];
            stream.read_exact(&mut len_buf).await.map_err(io_error)?;
            let len = u32::from_be_bytes(len_buf);
            if len == 0 {
                return Err(anyhow::anyhow!("Invalid message length: 0"));
            }
            if len > max {
                return Err(anyhow::anyhow!(
                    "Message too large: {} bytes (max: {})",
                    len,
                    max
                ));
            }

            let mut buf = vec![0u8; len as usize];
            stream.read_exact(&mut buf).await.map_err(io_error)?;
            bincode::deserialize(&buf).map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
        };
        timeout(limit, recv_op)
            .await
            .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", limit))?
    }
}
