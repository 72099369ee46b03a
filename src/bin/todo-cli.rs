use clap::{Parser, Subcommand};
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "todo-cli")]
#[command(about = "Client CLI for the to-do service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    CreateUser { name: String, username: String },
    /// Fetch a user by id
    ShowUser { id: String },
    /// Upgrade a user to the pro plan
    Upgrade { id: String },
    /// List a user's todos
    List { username: String },
    /// Add a todo (deadline in RFC 3339, e.g. 2031-05-20T12:00:00Z)
    Add {
        username: String,
        title: String,
        deadline: String,
    },
    /// Mark a todo as done
    Done { username: String, id: String },
    /// Delete a todo
    Remove { username: String, id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::CreateUser { name, username } => {
            let res = client
                .post(format!("{}/users", cli.url))
                .json(&serde_json::json!({ "name": name, "username": username }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::ShowUser { id } => {
            let res = client
                .get(format!("{}/users/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Upgrade { id } => {
            let res = client
                .patch(format!("{}/users/{}/pro", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::List { username } => {
            let res = client
                .get(format!("{}/todos", cli.url))
                .header("username", &username)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Add {
            username,
            title,
            deadline,
        } => {
            let res = client
                .post(format!("{}/todos", cli.url))
                .header("username", &username)
                .json(&serde_json::json!({ "title": title, "deadline": deadline }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Done { username, id } => {
            let res = client
                .patch(format!("{}/todos/{}/done", cli.url, id))
                .header("username", &username)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Remove { username, id } => {
            let res = client
                .delete(format!("{}/todos/{}", cli.url, id))
                .header("username", &username)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    if status == StatusCode::NO_CONTENT {
        println!("OK");
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
