use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagebuilder_editor::{DragRef, DropTarget, Element, ElementKind};

#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// Print the palette as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
struct PaletteEntry {
    id: String,
    label: &'static str,
    default: Element,
}

fn entries() -> Vec<PaletteEntry> {
    ElementKind::ALL
        .into_iter()
        .map(|kind| PaletteEntry {
            id: DragRef::Toolbox(kind).to_string(),
            label: kind.label(),
            default: Element::new(kind),
        })
        .collect()
}

pub fn palette(args: PaletteArgs) -> Result<()> {
    let entries = entries();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "🧰 Toolbox".bright_blue().bold());
    for entry in &entries {
        println!(
            "  {:<8} {}  {}",
            entry.label,
            entry.id.cyan(),
            serde_json::to_string(&entry.default)?.dimmed()
        );
    }
    println!();
    println!(
        "Drop targets: {} for empty canvas space, a position (e.g. {}) for a placed element",
        DropTarget::CanvasRegion.to_string().cyan(),
        DragRef::Canvas(0).to_string().cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_entries_use_drag_ids() {
        let ids: Vec<_> = entries().into_iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec!["toolbox-text", "toolbox-image", "toolbox-button"]);
    }
}
