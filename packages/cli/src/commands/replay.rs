use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use pagebuilder_editor::{parse_events, EditSession, EditorEvent, ElementList};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON file holding an array of editor events
    pub script: PathBuf,

    /// Optional JSON file with the starting element list
    #[arg(short, long)]
    pub initial: Option<PathBuf>,

    /// Stop at the first rejected event instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Print each handled event and the snapshot it left as a JSON line
    #[arg(long)]
    pub stdout_events: bool,
}

/// One handled event and the snapshot after it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStep {
    pub position: usize,
    pub event: EditorEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
    pub version: u64,
    pub elements: ElementList,
}

/// Outcome of replaying a script
#[derive(Debug)]
pub struct ReplayReport {
    pub elements: ElementList,
    pub version: u64,
    pub applied: usize,
    pub rejected: usize,
}

pub fn replay(args: ReplayArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let script = fs::read_to_string(&args.script)
        .with_context(|| format!("Cannot read script {}", args.script.display()))?;

    let initial = match &args.initial {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Cannot read initial list {}", path.display()))?;
            serde_json::from_str(&json)?
        }
        None => ElementList::new(),
    };

    let report = if args.stdout_events {
        run_script_with(&script, initial, &config, args.strict, |step| {
            println!("{}", serde_json::to_string(&step)?);
            Ok(())
        })?
    } else {
        run_script(&script, initial, &config, args.strict)?
    };

    let output = if config.pretty {
        serde_json::to_string_pretty(&report.elements)?
    } else {
        serde_json::to_string(&report.elements)?
    };
    println!("{}", output);

    eprintln!();
    if report.rejected == 0 {
        eprintln!(
            "{} Replayed {} events → {} elements (version {})",
            "✅".green(),
            report.applied,
            report.elements.len(),
            report.version
        );
    } else {
        eprintln!(
            "{} Replayed {} events, {} rejected → {} elements (version {})",
            "⚠️".yellow(),
            report.applied,
            report.rejected,
            report.elements.len(),
            report.version
        );
    }

    Ok(())
}

/// Drive an edit session through every event in `script`
pub fn run_script(
    script: &str,
    initial: ElementList,
    config: &Config,
    strict: bool,
) -> Result<ReplayReport> {
    run_script_with(script, initial, config, strict, |_| Ok(()))
}

/// Like [`run_script`], handing every step to `on_step` as it happens
pub fn run_script_with<F>(
    script: &str,
    initial: ElementList,
    config: &Config,
    strict: bool,
    mut on_step: F,
) -> Result<ReplayReport>
where
    F: FnMut(ReplayStep) -> Result<()>,
{
    let events = parse_events(script)?;
    let mut session = EditSession::from_snapshot(initial, &config.editor);

    let mut applied = 0;
    let mut rejected = 0;

    for (position, event) in events.into_iter().enumerate() {
        let outcome = session.handle(event.clone()).map(|_| ());

        on_step(ReplayStep {
            position,
            event,
            rejected: outcome.as_ref().err().map(ToString::to_string),
            version: session.version,
            elements: session.elements().clone(),
        })?;

        match outcome {
            Ok(()) => applied += 1,
            Err(e) if strict => {
                return Err(anyhow!("Event {} rejected: {}", position, e));
            }
            Err(e) => {
                rejected += 1;
                tracing::warn!(event = position, error = %e, "skipping rejected event");
                eprintln!("  {} event {} - {}", "✗".red(), position, e.to_string().red());
            }
        }
    }

    Ok(ReplayReport {
        elements: session.elements().clone(),
        version: session.version,
        applied,
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebuilder_editor::{Element, ElementKind};

    const SCRIPT: &str = r#"[
        { "event": "dragStart", "source": "toolbox-text" },
        { "event": "dragEnd", "target": "canvas" },
        { "event": "contentChanged", "index": 0, "text": "Hello" },
        { "event": "deleteClicked", "index": 5 },
        { "event": "dragStart", "source": "toolbox-button" },
        { "event": "dragEnd", "target": "canvas" }
    ]"#;

    #[test]
    fn test_replay_skips_rejected_events() {
        let report = run_script(SCRIPT, ElementList::new(), &Config::default(), false).unwrap();

        assert_eq!(report.applied, 5);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.version, 3);
        assert_eq!(report.elements.len(), 2);
        assert_eq!(report.elements.get(1), Some(&Element::new(ElementKind::Button)));
    }

    #[test]
    fn test_strict_replay_stops_at_first_rejection() {
        let result = run_script(SCRIPT, ElementList::new(), &Config::default(), true);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Event 3"), "{}", message);
    }

    #[test]
    fn test_double_drag_start_is_rejected_not_fatal() {
        let script = r#"[
            { "event": "dragStart", "source": "toolbox-text" },
            { "event": "dragStart", "source": "toolbox-image" },
            { "event": "dragEnd", "target": "canvas" }
        ]"#;

        let report = run_script(script, ElementList::new(), &Config::default(), false).unwrap();
        assert_eq!(report.applied, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.elements, ElementList::from(vec![Element::new(ElementKind::Text)]));

        let result = run_script(script, ElementList::new(), &Config::default(), true);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Event 1"), "{}", message);
    }

    #[test]
    fn test_steps_carry_event_and_snapshot() {
        let mut lines = Vec::new();
        let config = Config::default();
        let report = run_script_with(SCRIPT, ElementList::new(), &config, false, |step| {
            lines.push(serde_json::to_value(&step)?);
            Ok(())
        })
        .unwrap();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1]["event"]["event"], "dragEnd");
        assert_eq!(lines[1]["version"], 1);
        assert_eq!(lines[1]["elements"][0]["type"], "text");
        assert!(lines[1].get("rejected").is_none());

        assert_eq!(lines[3]["position"], 3);
        assert_eq!(lines[3]["version"], 2);
        assert!(lines[3]["rejected"].as_str().unwrap().contains("out of range"));

        assert_eq!(lines[5]["elements"], serde_json::to_value(&report.elements).unwrap());
    }

    #[test]
    fn test_replay_from_initial_list() {
        let initial: ElementList = vec![Element::new(ElementKind::Image)].into();
        let script = r#"[{ "event": "uploadCompleted", "index": 0, "src": "blob:logo" }]"#;

        let report = run_script(script, initial, &Config::default(), true).unwrap();
        assert_eq!(
            report.elements.get(0).and_then(Element::image_ref).map(|r| r.as_str()),
            Some("blob:logo")
        );
    }
}
