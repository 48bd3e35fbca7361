fn main() -> anyhow::Result<()> {
    aerial_signup::run()
}
