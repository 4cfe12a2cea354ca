use anyhow::Result;
use popshare::PipelineConfig;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::TablesArgs) -> Result<()> {
    let config = PipelineConfig::new(&args.input.input)
        .with_city(args.input.city)
        .with_separator(args.input.separator_byte()?)
        .with_output_dir(args.output.clone().unwrap_or(".".into()));

    let report = popshare::run(&config)?;

    print!("{}", report.marginals);
    for published in report.tables() {
        println!("Wrote {} ({} rows)", config.output_dir.join(published.layout.file_name).display(), published.table.num_rows());
    }

    Ok(())
}
