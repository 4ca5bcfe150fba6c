fn main() -> anyhow::Result<()> {
    cropline::run()?;
    Ok(())
}
