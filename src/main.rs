fn main() -> anyhow::Result<()> {
    kira_qc_collect::cli::run::entry()
}
