use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use wgedu::cli::create_admin;
use wgedu::cli::seeder::ensure_seed_data;
use wgedu_config::DatabaseConfig;
use wgedu_db::{PgPool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "wgedu-cli")]
#[command(about = "WG Edu CLI - Administrative tools for the WG Edu API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the database schema
    Migrate,
    /// Ensure the subject catalog, demo accounts and demo assignments exist
    Seed,
    /// Create a new administrator account
    CreateAdmin {
        /// Login name
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match init_db_pool(&DatabaseConfig::from_env()).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Seed => handle_seed(&pool).await,
        Commands::CreateAdmin { username, password } => {
            handle_create_admin(&pool, username, password).await
        }
    }
}

async fn handle_migrate(pool: &PgPool) {
    match run_migrations(pool).await {
        Ok(()) => println!("✅ Schema is up to date"),
        Err(e) => {
            eprintln!("❌ Migration failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &PgPool) {
    if let Err(e) = run_migrations(pool).await {
        eprintln!("❌ Migration failed: {}", e);
        std::process::exit(1);
    }

    match ensure_seed_data(pool).await {
        Ok(summary) => {
            println!("\n✅ Seed data ensured");
            println!("   Subjects created: {}", summary.subjects);
            println!("   Accounts created: {}", summary.users);
            println!("   Assignments created: {}", summary.assignments);
        }
        Err(e) => {
            eprintln!("\n❌ Seeding failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_create_admin(pool: &PgPool, username: Option<String>, password: Option<String>) {
    let username = match username {
        Some(username) => username,
        None => match Input::<String>::new().with_prompt("Username").interact_text() {
            Ok(username) => username,
            Err(e) => {
                eprintln!("❌ Failed to read username: {}", e);
                std::process::exit(1);
            }
        },
    };

    let password = match password {
        Some(password) => password,
        None => match Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
        {
            Ok(password) => password,
            Err(e) => {
                eprintln!("❌ Failed to read password: {}", e);
                std::process::exit(1);
            }
        },
    };

    match create_admin(pool, &username, &password).await {
        Ok(user) => {
            println!("\n✅ Admin created successfully!");
            println!("   ID: {}", user.id);
            println!("   Username: {}", user.username);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {}", e.public_message());
            std::process::exit(1);
        }
    }
}
