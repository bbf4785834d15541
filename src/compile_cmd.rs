//! Compile command: build the canonical model request and emit it as JSON.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use stsm_setup::{ModelRequest, setup};

use crate::cli::CompileArgs;
use crate::config::StsmConfig;
use crate::{convert, input};

/// Run the compile pipeline.
pub fn run(args: CompileArgs) -> Result<()> {
    let _cmd = info_span!("compile").entered();

    // 1. Load setup TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let mut config: StsmConfig =
        toml::from_str(&toml_str).context("failed to parse TOML config")?;
    if let Some(model) = args.model {
        config.model.model = model;
    }

    // 2. Read series and optional inputs
    info!(path = %args.series.display(), "reading series");
    let y = input::read_series(&args.series)?;
    let u = args
        .inputs
        .as_deref()
        .map(input::read_inputs)
        .transpose()?;

    // 3. Build the request
    let options = convert::build_model_options(&config.model, u)?;
    let request = setup(y, config.frequency, options).context("model setup failed")?;
    info!(
        model = %request.model(),
        h = request.h(),
        n = request.y().len(),
        "model request built"
    );

    // 4. Emit JSON
    let json = to_json(&request)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "wrote model request");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn to_json(request: &ModelRequest) -> Result<String> {
    serde_json::to_string_pretty(request).context("failed to serialize model request")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn compile_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(
            &dir,
            "stsm.toml",
            "frequency = 4\n[model]\nmodel = \"llt/equal/arma\"\n",
        );
        let series = write(&dir, "y.txt", "NaN\n1\n2\n3\n4\n5\n6\n7\n8\n");
        let output = dir.path().join("out.json");

        run(CompileArgs {
            config,
            series,
            inputs: None,
            model: None,
            output: Some(output.clone()),
        })
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["model"], "llt/none/equal/arma(0,0)");
        assert_eq!(json["h"], 18);
        assert_eq!(json["y"].as_array().unwrap().len(), 8);
        assert_eq!(json["periods"], serde_json::json!([4.0, 2.0]));
    }

    #[test]
    fn compile_with_inputs_and_model_override() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(&dir, "stsm.toml", "frequency = 12\n[model]\nh = 30\n");
        let series = write(&dir, "y.txt", "1\n2\n3\n4\n");
        let inputs = write(&dir, "u.txt", "1,2,3,4,5,6\n0,0,1,1,0,0\n7,7,7,7,7,7\n");
        let output = dir.path().join("out.json");

        run(CompileArgs {
            config,
            series,
            inputs: Some(inputs),
            model: Some("rw/12/none/none".to_string()),
            output: Some(output.clone()),
        })
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["model"], "rw/+12/none/none");
        assert_eq!(json["h"], 2);
    }

    #[test]
    fn compile_reports_setup_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(
            &dir,
            "stsm.toml",
            "frequency = 12\n[model]\nmodel = \"none/none/none/none\"\n",
        );
        let series = write(&dir, "y.txt", "1\n2\n");

        let err = run(CompileArgs {
            config,
            series,
            inputs: None,
            model: None,
            output: None,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("model setup failed"));
    }
}
