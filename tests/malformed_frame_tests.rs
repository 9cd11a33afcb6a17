use herogrid::protocol::{Message, PROTOCOL_VERSION};
use herogrid::transport::tcp::TcpTransport;
use herogrid::transport::Transport;
use herogrid::{EngineConfig, Player, Session};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::Duration;

/// Connect to a server that writes `bytes` and then holds the socket open briefly.
async fn recv_from_raw(bytes: Vec<u8>) -> anyhow::Result<anyhow::Result<Message>> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server_task = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(&bytes).await.unwrap();
        socket.flush().await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    });

    let mut transport = TcpTransport::connect(addr).await?;
    let result = transport.recv().await;
    server_task.await?;
    Ok(result)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_oversized_length_prefix() -> anyhow::Result<()> {
    let result = recv_from_raw(vec![0xFF, 0xFF, 0xFF, 0xFF]).await?;
    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.contains("too large"), "{}", err_msg);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zero_length_frame() -> anyhow::Result<()> {
    let result = recv_from_raw(vec![0, 0, 0, 0]).await?;
    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.contains("length: 0"), "{}", err_msg);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_truncated_frame() -> anyhow::Result<()> {
    let mut bytes = 100u32.to_be_bytes().to_vec();
    bytes.extend_from_slice(&[0u8; 10]);
    let result = recv_from_raw(bytes).await?;
    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.contains("closed"), "{}", err_msg);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_garbage_payload() -> anyhow::Result<()> {
    let garbage = vec![0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
    let mut bytes = (garbage.len() as u32).to_be_bytes().to_vec();
    bytes.extend_from_slice(&garbage);
    let result = recv_from_raw(bytes).await?;
    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.contains("Deserialization"), "{}", err_msg);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sender_refuses_oversized_message() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server_task = tokio::spawn(async move {
        let _ = listener.accept().await.unwrap();
    });

    let stream = TcpStream::connect(addr).await?;
    let mut transport = TcpTransport::with_config(stream, Duration::from_secs(1), 16);
    let state = Session::standard(EngineConfig::default())?.state();
    let err = transport
        .send(Message::Welcome {
            version: PROTOCOL_VERSION,
            seat: Player::A,
            state,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("too large"));
    server_task.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_receive_timeout() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server_task = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_millis(500)).await;
    });

    let stream = TcpStream::connect(addr).await?;
    let mut transport = TcpTransport::with_config(stream, Duration::from_millis(100), 1024);
    let err = transport.recv().await.unwrap_err();
    assert!(err.to_string().contains("timeout"), "{}", err);
    server_task.await?;
    Ok(())
}
