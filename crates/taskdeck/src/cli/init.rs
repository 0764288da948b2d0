/*
[INPUT]:  Output path for a new configuration file
[OUTPUT]: Default YAML configuration written to disk
[POS]:    CLI initialization layer
[UPDATE]: When TaskdeckConfig schema changes
*/

use anyhow::{Context, Result, bail};
use console::style;
use std::path::Path;

use taskdeck::TaskdeckConfig;
use taskdeck_core::Task;

pub fn run_init(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite",
            output.display()
        );
    }

    let config = TaskdeckConfig {
        seed_tasks: sample_tasks(),
        ..TaskdeckConfig::default()
    };
    let yaml = config.to_yaml()?;

    if let Some(parent) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    tracing::info!(path = %output.display(), "configuration written");
    println!("{}", style("SUCCESS!").bold().green());
    println!("Configuration written to: {}", style(output.display()).cyan());

    Ok(())
}

fn sample_tasks() -> Vec<Task> {
    (1..=3)
        .map(|i| Task::new(format!("Task {i}"), format!("Detail of task {i}")))
        .collect()
}
