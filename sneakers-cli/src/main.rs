use clap::{Parser, Subcommand};
use sneakers_core::{
    Authenticator, CheckoutSession, Credentials, Fit, OrderSummary, PaymentInstruction,
    PaymentMethod, ProductId, SizeSystem, StoreConfig, Storefront, size_guide,
};

#[derive(Parser)]
#[command(name = "sneakers")]
#[command(about = "Browse the sneaker catalog from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of the catalog
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Show product details
    Show {
        /// Product id
        id: String,
    },
    /// Print the size guide, or convert a single size
    Sizes {
        /// regular or wide
        #[arg(long, default_value = "regular")]
        fit: Fit,
        /// us, eu or uk
        #[arg(long, default_value = "us")]
        system: SizeSystem,
        /// Size to convert into the other systems
        #[arg(long)]
        size: Option<String>,
    },
    /// Walk through the mocked checkout for a product
    Pay {
        /// Product id
        id: String,
        /// qris, gopay, ovo, bca or mandiri
        #[arg(short, long)]
        method: PaymentMethod,
    },
    /// Check credentials against the demo account
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let store = Storefront::new(StoreConfig::from_env()?)?;

    match cli.command {
        Commands::List { page } => match store.get_page(page).await {
            Ok(result) => {
                println!(
                    "Page {} of {} ({} items total)",
                    result.current_page, result.total_pages, result.total_items
                );
                for record in &result.items {
                    println!(
                        "  [{}] {} - {} ({}) {}",
                        record.id.as_ref().map(|id| id.as_str()).unwrap_or("-"),
                        record.display_brand(),
                        record.display_name(),
                        record.display_color(),
                        record.formatted_price()
                    );
                }
                if result.items.is_empty() {
                    println!("  No items on this page.");
                }
                println!("{}", result.showing_summary());
            }
            Err(e) => {
                eprintln!("Failed to fetch sneakers: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Show { id } => {
            let record = match store.find_product(&ProductId::new(id)).await {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            println!("{}", record.display_brand());
            println!("{}", record.display_name());
            println!("  Color:     {}", record.display_color());
            if let Some(date) = record.release_date() {
                println!("  Release:   {}", date);
            }
            if let Some(condition) = record.condition_label() {
                println!("  Condition: {}", condition);
            }
            if let Some(sku) = &record.sku {
                println!("  SKU:       {}", sku);
            }
            println!("  Price:     {}", record.formatted_price());
            if let Some(story) = record.story_text() {
                println!();
                println!("{}", story);
            }
        }
        Commands::Sizes { fit, system, size } => match size {
            Some(size) => match size_guide::convert(fit, system, &size) {
                Some(conversions) => {
                    let others: Vec<String> = conversions
                        .iter()
                        .map(|(other, value)| format!("{}: {}", other, value))
                        .collect();
                    println!("{} {} {} = {}", fit, system, size, others.join(", "));
                }
                None => {
                    eprintln!("Size '{}' is not in the {} {} table", size, fit, system);
                    std::process::exit(1);
                }
            },
            None => {
                println!("{} ({})", fit, system);
                println!("  {}", size_guide::sizes(fit, system).join("  "));
            }
        },
        Commands::Pay { id, method } => {
            let record = store.find_product(&ProductId::new(id)).await?;
            let mut session = CheckoutSession::new(OrderSummary::from(&record));
            session.select(method);

            let order = session.order();
            println!("{} - {}", order.brand, order.name);
            println!("Total: {} via {}", order.formatted_price(), method);

            let instruction = session.confirm()?;
            println!("{}", instruction.title());
            println!("{}", instruction.message());
            if let PaymentInstruction::VirtualAccount { expires_at, .. } = instruction {
                println!("Expires at: {}", expires_at);
            }
        }
        Commands::Login { email, password } => {
            let auth = store.authenticator();
            match auth.authenticate(&Credentials::new(email, password)).await {
                Ok(session) => println!("Logged in as {}", session.email),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
