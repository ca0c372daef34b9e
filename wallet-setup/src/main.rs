//! # Wallet Setup
//!
//! Interactive create-wallet workflow against a running wallet service.
//!
//! ## Usage
//!
//! ```bash
//! WALLET_API_URL=http://127.0.0.1:28183 cargo run --package wallet-setup
//! ```
//!
//! The program will:
//! 1. Probe the wallet service
//! 2. Ask for a wallet name and password
//! 3. Create the wallet and show the seed phrase
//! 4. Ask for the seed words back (or skip, when enabled)
//! 5. Wait until the service has the wallet loaded, then start it

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use shared::{wallet_display_name, ApiAuthContext};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use wallet_setup::app::{FormField, Step};
use wallet_setup::ui::Control;
use wallet_setup::{debug, ApiClient, CreateWalletApp, WalletSetupConfig};

const SESSION_POLL_INTERVAL: Duration = Duration::from_secs(2);

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = debug::init();

    let config = WalletSetupConfig::from_env()?;
    let api = Arc::new(ApiClient::new(&config)?);
    let starter = |wallet_file_name: &str, _auth: &ApiAuthContext| {
        println!("Starting wallet {}", wallet_file_name);
    };
    let mut app = CreateWalletApp::new(api, Arc::new(starter), &config);

    println!("============================================");
    println!("  Create Wallet");
    println!("============================================");
    println!();

    let info = app
        .service_info()
        .await
        .with_context(|| format!("Wallet service at {} is not reachable", config.api_base_url))?;
    println!("Connected to wallet service {}.", info.version);
    println!();

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    create(&mut app, &mut input).await?;
    write_down(&mut app, &mut input).await?;
    confirm_backup(&mut app, &mut input).await?;

    println!();
    println!("Waiting for the wallet service to load the wallet...");
    loop {
        app.check_session();
        app.next_event().await;
        if app.view().is_enabled(Control::FundWallet) {
            break;
        }
        tokio::time::sleep(SESSION_POLL_INTERVAL).await;
    }

    app.handle_fund_click()?;
    println!("Done.");
    Ok(())
}

async fn prompt(input: &mut Input, label: &str) -> anyhow::Result<String> {
    println!("{}: ", label);
    match input.next_line().await? {
        Some(line) => Ok(line.trim_end_matches('\r').to_string()),
        None => bail!("Input closed"),
    }
}

/// Fill in and submit the form until the wallet service creates the wallet.
async fn create(app: &mut CreateWalletApp, input: &mut Input) -> anyhow::Result<()> {
    loop {
        let name = prompt(input, "Wallet name").await?;
        let password = prompt(input, "Password").await?;
        let confirm = prompt(input, "Confirm password").await?;

        app.edit_field(FormField::WalletName, name)?;
        app.edit_field(FormField::Password, password)?;
        app.edit_field(FormField::PasswordConfirm, confirm)?;
        app.handle_create_click()?;

        if !app.is_submitting() {
            for key in app.view().feedback {
                println!("  ! {}", key);
            }
            continue;
        }

        println!("Creating wallet...");
        app.next_event().await;

        if let Some((key, message)) = app.view().error {
            println!("  ! {}: {}", key, message);
            continue;
        }
        return Ok(());
    }
}

/// Show the seed phrase and wait for the user to write it down.
async fn write_down(app: &mut CreateWalletApp, input: &mut Input) -> anyhow::Result<()> {
    if let Some(result) = app.state.read().step.result() {
        println!();
        println!("Wallet {} created.", wallet_display_name(result.wallet_file_name()));
    }

    app.toggle_reveal()?;
    println!();
    println!("Seed phrase:");
    for (i, word) in app.view().seed_words.unwrap_or_default().iter().enumerate() {
        println!("  {:>2}. {}", i + 1, word);
    }
    println!();

    loop {
        let answer = prompt(input, "Have you written down the seed phrase? (yes/no)").await?;
        if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
            break;
        }
    }

    app.toggle_written_down()?;
    app.handle_next_click()?;
    Ok(())
}

/// Ask for every seed word until they all match, or skip when allowed.
async fn confirm_backup(app: &mut CreateWalletApp, input: &mut Input) -> anyhow::Result<()> {
    let skip_available = app.view().is_rendered(Control::Skip);
    let words = app.view().backup_inputs.len();
    if words == 0 {
        bail!("Wallet has no seed words to confirm");
    }

    println!();
    if skip_available {
        println!("Re-enter your seed phrase (type 'skip' to skip).");
    } else {
        println!("Re-enter your seed phrase.");
    }

    loop {
        for index in 0..words {
            let word = prompt(input, &format!("Word {}", index + 1)).await?;
            if skip_available && word.trim() == "skip" {
                app.handle_skip_click()?;
                return Ok(());
            }
            app.enter_backup_word(index, word)?;
            if !matches!(app.state.read().step, Step::Confirming { .. }) {
                return Ok(());
            }
        }
        println!("  ! The words do not match your seed phrase, try again.");
    }
}
