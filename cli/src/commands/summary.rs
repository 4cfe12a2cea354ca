use anyhow::Result;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::InputArgs) -> Result<()> {
    let records = popshare::load(&args.input, args.city, args.separator_byte()?)?;
    let report = popshare::build_report(&records)?;

    print!("{}", report.marginals);

    Ok(())
}
