use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = pantry_api::Args::parse();
	pantry_api::run(args).await
}
