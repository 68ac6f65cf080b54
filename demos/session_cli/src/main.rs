// Copyright 2026 The media-client contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    env,
    io::{self, Write},
};

use anyhow::anyhow;
use media_client::{
    media::{AudioSearch, ImageSearch},
    Access, Client,
};
use url::Url;

/// A command-line tool to try the session handling of the media client.
///
/// Run it with `cargo run -p demo-session-cli -- [base URL]`, the base URL
/// defaults to a server running locally. Everything is interactive after
/// that. The session is kept in a JSON file in the data directory of the
/// user, so a login survives restarting the program. Set the `RUST_LOG`
/// environment variable to `debug` to see the requests.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url = env::args().nth(1).unwrap_or_else(|| "http://127.0.0.1:5000".to_owned());
    let base_url = Url::parse(&base_url)?;

    // The folder containing this demo's data.
    let data_dir = dirs::data_dir()
        .ok_or_else(|| anyhow!("no data_dir directory found"))?
        .join("media_client/session_cli");
    // The file where the session is persisted.
    let store_path = data_dir.join("storage.json");

    let client = Client::builder().base_url(base_url).json_store_path(&store_path).build().await?;

    println!("Session stored in {}", store_path.display());

    match client.access() {
        Access::Granted => {
            let username = client.user().map(|user| user.username);
            println!("Restored the session of {}", username.as_deref().unwrap_or("<unknown>"));
        }
        Access::RedirectToLogin | Access::Pending => println!("Not logged in"),
    }

    SessionCli { client }.run().await
}

/// The available commands.
fn help() {
    println!("Usage: [command] [args…]\n");
    println!("Commands:");
    println!("  whoami                            Show who is logged in");
    println!("  register <user> <email> <pass>    Create an account");
    println!("  login <user> <pass>               Log in");
    println!("  logout                            Log out");
    println!("  images <query…>                   Search for images");
    println!("  audio <query…>                    Search for audio tracks");
    println!("  history                           List the saved searches");
    println!("  save <query…>                     Save a search");
    println!("  forget <id>                       Remove a saved search");
    println!("  contacts                          List the contacts");
    println!("  exit                              Exit this program");
    println!("  help                              Show this message\n");
}

struct SessionCli {
    client: Client,
}

impl SessionCli {
    /// Run the main program.
    async fn run(&self) -> anyhow::Result<()> {
        help();

        loop {
            let mut input = String::new();

            print!("\nEnter command: ");
            io::stdout().flush()?;

            if io::stdin().read_line(&mut input)? == 0 {
                // End of input.
                break;
            }

            let mut args = input.trim().split_ascii_whitespace();
            let cmd = args.next();

            let result = match cmd {
                Some("whoami") => {
                    self.whoami();
                    Ok(())
                }
                Some("register") => match (args.next(), args.next(), args.next()) {
                    (Some(username), Some(email), Some(password)) => {
                        self.client.auth().register(username, email, password).await
                    }
                    _ => {
                        println!("Error: expected a username, an email and a password");
                        Ok(())
                    }
                },
                Some("login") => match (args.next(), args.next()) {
                    (Some(username), Some(password)) => self.login(username, password).await,
                    _ => {
                        println!("Error: expected a username and a password");
                        Ok(())
                    }
                },
                Some("logout") => self.client.auth().logout().await,
                Some("images") => self.images(args.collect::<Vec<_>>().join(" ")).await,
                Some("audio") => self.audio(args.collect::<Vec<_>>().join(" ")).await,
                Some("history") => self.history().await,
                Some("save") => {
                    self.client.history().save(&args.collect::<Vec<_>>().join(" ")).await
                }
                Some("forget") => match args.next().map(str::parse::<u64>) {
                    Some(Ok(id)) => self.client.history().delete(id).await,
                    _ => {
                        println!("Error: expected the numeric ID of a saved search");
                        Ok(())
                    }
                },
                Some("contacts") => self.contacts().await,
                Some("exit") => {
                    break;
                }
                Some("help") => {
                    help();
                    Ok(())
                }
                Some(cmd) => {
                    println!("Error: unknown command '{cmd}'\n");
                    help();
                    Ok(())
                }
                None => {
                    println!("Error: no command\n");
                    help();
                    Ok(())
                }
            };

            // Failed requests are reported, the program keeps running.
            if let Err(error) = result {
                println!("Error: {error}");
            }
        }

        Ok(())
    }

    fn whoami(&self) {
        match self.client.user() {
            Some(user) => {
                println!("\nUsername: {}", user.username);
                for (field, value) in &user.extra {
                    println!("{field}: {value}");
                }
            }
            None if self.client.logged_in() => println!("\nLogged in, but the profile is unknown"),
            None => println!("\nNot logged in"),
        }
    }

    async fn login(&self, username: &str, password: &str) -> media_client::Result<()> {
        let response = self.client.auth().login_username(username, password).await?;
        println!("Logged in as {}", response.user.username);
        Ok(())
    }

    async fn images(&self, query: String) -> media_client::Result<()> {
        let response = self.client.search().images(ImageSearch::new(query).page_size(12)).await?;

        println!(
            "\n{} results, page {}/{}",
            response.result_count, response.page, response.page_count
        );
        for image in response.results {
            println!("  {}  {}", image.id, image.title.as_deref().unwrap_or("(untitled)"));
        }

        Ok(())
    }

    async fn audio(&self, query: String) -> media_client::Result<()> {
        let response = self.client.search().audio(AudioSearch::new(query)).await?;

        println!(
            "\n{} results, page {}/{}",
            response.result_count, response.page, response.page_count
        );
        for track in response.results {
            println!("  {}  {}", track.id, track.title.as_deref().unwrap_or("(untitled)"));
        }

        Ok(())
    }

    async fn history(&self) -> media_client::Result<()> {
        let history = self.client.history().list().await?;

        if history.is_empty() {
            println!("\nNo saved searches");
        }
        for entry in history {
            println!("  {:>4}  {}  {}", entry.id, entry.timestamp, entry.query);
        }

        Ok(())
    }

    async fn contacts(&self) -> media_client::Result<()> {
        let contacts = self.client.contacts().list().await?;

        if contacts.is_empty() {
            println!("\nNo contacts");
        }
        for contact in contacts {
            println!(
                "  {:>4}  {} {} <{}>",
                contact.id, contact.first_name, contact.last_name, contact.email
            );
        }

        Ok(())
    }
}
