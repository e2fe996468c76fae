fn main() -> anyhow::Result<()> {
    drills_cli::run()
}
