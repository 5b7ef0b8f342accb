use clap::Parser;
use plantao_farma::app::screen::teardown_on;
use plantao_farma::app::{permission, render};
use plantao_farma::config::cli::{Command, ListArgs};
use plantao_farma::domain::ports::Clock;
use plantao_farma::utils::{logger, validation::Validate};
use plantao_farma::{AppConfig, Cli, FixedClock, HttpDirectory, LoadStatus, PharmacyScreen, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Some(base_url) = cli.base_url.take() {
        config.directory.base_url = base_url;
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    logger::init_logger(cli.verbose, &config.logging);
    tracing::debug!("Configuration: {:?}", config);

    match cli.take_command() {
        Command::List(args) => {
            let directory = HttpDirectory::new(&config.directory)?;
            tracing::info!("Using pharmacy directory at {}", directory.endpoint());

            let status = match args.at {
                Some(at) => list(directory, FixedClock::new(at), &args).await?,
                None => list(directory, SystemClock, &args).await?,
            };

            match status {
                LoadStatus::Loaded => {}
                LoadStatus::Cancelled => std::process::exit(130),
                _ => std::process::exit(2),
            }
        }
        Command::Contacts => {
            print!("{}", render::render_contacts(&config.contacts));
        }
        Command::Permission { yes } => {
            let granted = if yes {
                println!("{}", permission::location_prompt(&config.app.name));
                true
            } else {
                let stdin = std::io::stdin();
                permission::ask_location_permission(
                    &config.app.name,
                    stdin.lock(),
                    std::io::stdout(),
                )?
            };

            if !granted {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn list<C: Clock>(
    directory: HttpDirectory,
    clock: C,
    args: &ListArgs,
) -> anyhow::Result<LoadStatus> {
    let mut screen = PharmacyScreen::new(directory, clock);

    let status = screen
        .activate_until(shutdown_signal())
        .await;

    if args.expand {
        screen.open_cards_mut().iter_mut().for_each(|card| card.toggle());
        screen.closed_cards_mut().iter_mut().for_each(|card| card.toggle());
    }

    if args.json {
        println!("{}", render::render_json(&screen)?);
    } else if matches!(status, LoadStatus::Failed(_)) {
        eprint!("{}", render::render_text(&screen));
    } else {
        print!("{}", render::render_text(&screen));
    }

    Ok(status)
}

async fn shutdown_signal() {
    teardown_on(tokio::signal::ctrl_c()).await
}
