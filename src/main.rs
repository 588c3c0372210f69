use anyhow::Result;
use uml_codegen::cli::{Cli, Commands};
use uml_codegen::config::Config;
use uml_codegen::pipeline::Pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Generate { config, verbose } => {
            run_generate(&config, verbose)?;
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;
        }
    }

    Ok(())
}

/// Run the generate command
fn run_generate(config_path: &std::path::Path, verbose: bool) -> Result<()> {
    let config = Config::load(config_path)?;

    if verbose {
        println!("Loaded configuration from: {}", config_path.display());
    }

    let pipeline = Pipeline::new(verbose);
    pipeline.run(&config)
}

/// Run the init command
fn run_init(output_path: &std::path::Path, force: bool) -> Result<()> {
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = Config::default_config();
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  [input]");
    println!("    schema_file: UML class diagram (JSON)");
    println!("  [output]");
    println!("    dir: Directory for the generated project");
    println!("    overwrite: Replace an existing project (default: false)");
    println!("    archive: Write <dir>/<artifact_id>.zip instead (default: false)");
    println!("  [project]");
    println!("    base_package: Java package of the generated sources");
    println!("    artifact_id / group_id: Maven coordinates");
    println!("    java_version / spring_boot_version: Build targets");
    println!("  [application]");
    println!("    server_port, ddl_auto, show_sql: Spring Boot settings");
    println!("  [application.datasource]");
    println!("    vendor, host, port, name, username, password, driver, dialect");

    Ok(())
}
