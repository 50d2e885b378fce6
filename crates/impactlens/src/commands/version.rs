pub fn run() -> anyhow::Result<()> {
    println!("impactlens {}", env!("CARGO_PKG_VERSION"));
    println!("Synthetic pull-request impact analytics");
    Ok(())
}
