//! Mint an HS256 bearer token for exercising the gateway.

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use jsonwebtoken::{encode, EncodingKey, Header};

use specter_gateway::auth::Claims;

#[derive(Parser, Debug)]
#[command(name = "specter-token", about = "Generate a test bearer token")]
struct Args {
    /// Subject claim
    #[arg(long, default_value = "specter-test-user")]
    sub: String,

    /// Token lifetime in seconds
    #[arg(long, default_value_t = 3600)]
    expires_in: i64,

    /// Signing secret; falls back to SPECTER_JWT_SECRET, then "dev-secret"
    #[arg(long)]
    secret: Option<String>,

    /// Issuer claim
    #[arg(long, default_value = "specter-ai-client")]
    issuer: String,

    /// Role claim
    #[arg(long, default_value = "tester")]
    role: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let secret = args
        .secret
        .or_else(|| std::env::var("SPECTER_JWT_SECRET").ok())
        .unwrap_or_else(|| "dev-secret".to_string());

    let exp = (Utc::now() + Duration::seconds(args.expires_in)).timestamp() as usize;
    let claims = Claims {
        sub: args.sub,
        iss: args.issuer,
        exp,
        role: Some(args.role),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    println!("Bearer {token}");
    Ok(())
}
