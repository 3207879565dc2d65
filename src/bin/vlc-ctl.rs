use clap::{Parser, Subcommand};

use vlc_cors_proxy::control::client::DEFAULT_STATUS_URL;
use vlc_cors_proxy::control::{find_binding, ControlClient, HotkeyAction, PlayerCommand, HOTKEY_BINDINGS};

#[derive(Parser)]
#[command(name = "vlc-ctl")]
#[command(about = "Send commands to the VLC HTTP interface", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = DEFAULT_STATUS_URL)]
    url: String,

    #[arg(short, long, env = "VLC_PASSWORD", default_value = "")]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that VLC is reachable
    Probe,
    /// Toggle play/pause
    PlayPause,
    /// Stop playback
    Stop,
    /// Seek by a signed number of seconds
    Seek {
        #[arg(allow_hyphen_values = true)]
        offset: i32,
    },
    /// Change volume by a signed amount
    Volume {
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
    /// Next playlist item
    Next,
    /// Previous playlist item
    Previous,
    /// Run the action bound to a chord, e.g. ctrl+alt+space
    Chord { chord: String },
    /// Send a raw command name
    Send {
        command: String,
        #[arg(long, allow_hyphen_values = true)]
        val: Option<String>,
    },
    /// List chord bindings
    Bindings,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ControlClient::new(&cli.url, cli.password)?;

    let command = match cli.command {
        Commands::Probe => {
            match client.probe().await {
                Ok(()) => println!("VLC connection successful"),
                Err(e) => {
                    eprintln!("Cannot connect to VLC: {}", e);
                    eprintln!("Make sure VLC is running with: vlc --intf dummy --extraintf http --http-password <password>");
                    std::process::exit(1);
                }
            }
            return Ok(());
        }
        Commands::Bindings => {
            for binding in HOTKEY_BINDINGS {
                println!("  {:<22} - {}", binding.chord, binding.description);
            }
            return Ok(());
        }
        Commands::Send { command, val } => {
            report(&command, client.send_raw(&command, val.as_deref()).await);
            return Ok(());
        }
        Commands::Chord { chord } => match find_binding(&chord) {
            Some(binding) => match binding.action {
                HotkeyAction::Command(command) => command,
                HotkeyAction::Quit => {
                    println!("{} quits the hotkey listener; nothing to send", binding.chord);
                    return Ok(());
                }
            },
            None => {
                eprintln!("No binding for '{}'", chord);
                std::process::exit(2);
            }
        },
        Commands::PlayPause => PlayerCommand::PlayPause,
        Commands::Stop => PlayerCommand::Stop,
        Commands::Seek { offset } => PlayerCommand::Seek(offset),
        Commands::Volume { delta } => PlayerCommand::Volume(delta),
        Commands::Next => PlayerCommand::Next,
        Commands::Previous => PlayerCommand::Previous,
    };

    report(&command.to_string(), client.send(command).await);
    Ok(())
}

fn report(label: &str, result: Result<(), vlc_cors_proxy::control::ControlError>) {
    match result {
        Ok(()) => println!("VLC command sent: {}", label),
        Err(e) => {
            eprintln!("VLC error: {}", e);
            std::process::exit(1);
        }
    }
}
