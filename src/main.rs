#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use herogrid::{
    init_logging, ui::print_state, Agent, CliAgent, EngineConfig, GameResult, InMemoryTransport,
    PathPolicy, PieceKind, PlayerNode, RandomAgent, Referee, Session, SessionHandle,
    TcpTransport, DEFAULT_FORMATION,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum AgentType {
    Human,
    Random,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct RuleArgs {
    /// Let Hero1/Hero2 pass over friendly pieces and capture opponents on their path.
    #[arg(long)]
    sweep: bool,
    /// Player A formation, e.g. "H1,H2,P,H2,H1".
    #[arg(long, value_delimiter = ',')]
    formation_a: Option<Vec<PieceKind>>,
    /// Player B formation, e.g. "H1,H2,P,H2,H1".
    #[arg(long, value_delimiter = ',')]
    formation_b: Option<Vec<PieceKind>>,
    /// Stop the game after this many accepted moves.
    #[arg(long)]
    max_plies: Option<u32>,
}

#[cfg(feature = "std")]
impl RuleArgs {
    fn session(&self) -> anyhow::Result<Session> {
        let policy = if self.sweep {
            PathPolicy::Sweep
        } else {
            PathPolicy::Strict
        };
        let a = self.formation_a.as_deref().unwrap_or(&DEFAULT_FORMATION);
        let b = self.formation_b.as_deref().unwrap_or(&DEFAULT_FORMATION);
        Session::with_config(a, b, EngineConfig::new(policy)).map_err(|e| anyhow::anyhow!(e))
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play two random agents against each other in-process.
    Local {
        #[command(flatten)]
        rules: RuleArgs,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Host a game: the first connection plays A, the second B.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[command(flatten)]
        rules: RuleArgs,
    },
    /// Join a hosted game.
    Join {
        #[arg(long, default_value = "127.0.0.1:8080")]
        connect: String,
        #[arg(long, value_enum, default_value_t = AgentType::Human)]
        agent: AgentType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn report(result: GameResult) {
    match result {
        GameResult::Winner(p) => println!("Game over: player {} wins.", p),
        GameResult::InProgress => println!("Game stopped without a winner."),
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { rules, seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let (handle, task) = SessionHandle::spawn(rules.session()?);
            let (ref_a, node_a) = InMemoryTransport::pair();
            let (ref_b, node_b) = InMemoryTransport::pair();
            let mut referee = Referee::new(handle, ref_a, ref_b);
            if let Some(max) = rules.max_plies {
                referee = referee.with_ply_limit(max);
            }

            let mut rng_a = seeded_rng(seed);
            let mut rng_b = seeded_rng(seed.map(|s| s.wrapping_add(1)));
            let mut player_a = PlayerNode::new(Box::new(RandomAgent::new()), Box::new(node_a));
            let mut player_b = PlayerNode::new(Box::new(RandomAgent::new()), Box::new(node_b));

            let (result, _, _) = tokio::try_join!(
                referee.run(),
                player_a.run(&mut rng_a),
                player_b.run(&mut rng_b),
            )?;
            drop(referee);
            let session = task.await?;
            print_state(&session.state());
            report(result);
        }
        Commands::Serve { bind, rules } => {
            let listener = TcpListener::bind(&bind).await?;
            println!("Waiting for two players on {}...", bind);
            let (stream_a, addr_a) = listener.accept().await?;
            println!("Player A connected from {}", addr_a);
            let (stream_b, addr_b) = listener.accept().await?;
            println!("Player B connected from {}", addr_b);

            let (handle, _task) = SessionHandle::spawn(rules.session()?);
            let mut referee = Referee::new(
                handle,
                TcpTransport::new(stream_a),
                TcpTransport::new(stream_b),
            );
            if let Some(max) = rules.max_plies {
                referee = referee.with_ply_limit(max);
            }
            match referee.run().await {
                Ok(result) => report(result),
                Err(e) => eprintln!("Game ended with an error: {}", e),
            }
        }
        Commands::Join {
            connect,
            agent,
            seed,
        } => {
            println!("Connecting to {}...", connect);
            let transport = TcpTransport::connect(&connect).await?;
            println!("Connected successfully!");
            let agent: Box<dyn Agent + Send> = match agent {
                AgentType::Human => Box::new(CliAgent::new()),
                AgentType::Random => Box::new(RandomAgent::new()),
            };
            let mut rng = seeded_rng(seed);
            let mut node = PlayerNode::new(agent, Box::new(transport));
            match node.run(&mut rng).await {
                Ok(state) => {
                    print_state(&state);
                    report(state.result);
                }
                Err(e) => eprintln!("Game ended with an error: {}", e),
            }
        }
    }
    Ok(())
}
