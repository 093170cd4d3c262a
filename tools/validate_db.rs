use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use sqlx::Row;
use std::env;

/// Report company rows whose client no longer exists
#[derive(Parser)]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Delete the orphaned company rows
    #[arg(long)]
    fix: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .context("DATABASE_URL must be set or passed with --database-url")?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&db_url)
        .await
        .context("failed to connect to database")?;

    let orphans = sqlx::query(
        r#"
        SELECT co.company_id, co.client_id, co.company_name
        FROM companies co
        LEFT JOIN clients c ON c.client_id = co.client_id
        WHERE c.client_id IS NULL
        ORDER BY co.company_id
        "#,
    )
    .fetch_all(&pool)
    .await?;

    println!("Orphaned company rows: {}", orphans.len());
    for r in orphans.iter() {
        let company_id: i64 = r.get("company_id");
        let client_id: Option<i64> = r.get("client_id");
        let name: Option<String> = r.get("company_name");
        println!(
            "company_id: {}, client_id: {}, name: {}",
            company_id,
            client_id.map_or_else(|| "NULL".to_string(), |id| id.to_string()),
            name.as_deref().unwrap_or("-")
        );

        if cli.fix {
            sqlx::query("DELETE FROM companies WHERE company_id = $1")
                .bind(company_id)
                .execute(&pool)
                .await?;
            println!("Deleted company {}", company_id);
        }
    }

    if !orphans.is_empty() && !cli.fix {
        println!("Run again with --fix to delete them");
    }

    Ok(())
}
