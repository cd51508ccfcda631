use border_progress::{BorderOptions, ElementId, ProgressBorders, StaticElement};
use camino::Utf8PathBuf;
use rayon::prelude::*;
use std::fs;

/// One row of the gallery: a host element shape rendered at several levels.
struct Sample {
    name: &'static str,
    width: f64,
    height: f64,
    border_radius: Option<&'static str>,
}

const SAMPLES: &[Sample] = &[
    Sample { name: "circle", width: 40.0, height: 40.0, border_radius: Some("50%") },
    Sample { name: "square", width: 40.0, height: 40.0, border_radius: None },
    Sample { name: "rounded square", width: 48.0, height: 48.0, border_radius: Some("10px") },
    Sample { name: "rounded rect", width: 96.0, height: 40.0, border_radius: Some("8px") },
    Sample { name: "pill", width: 120.0, height: 36.0, border_radius: Some("18px") },
    Sample { name: "unmeasured", width: 0.0, height: 0.0, border_radius: None },
];

const LEVELS: &[f64] = &[0.0, 12.5, 25.0, 50.0, 75.0, 100.0];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [offset-percent]    Render every sample shape into gallery.html");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => {
            let offset = match args.get(2).map(|s| s.parse::<f64>()) {
                None => 0.0,
                Some(Ok(offset)) => offset,
                Some(Err(e)) => {
                    eprintln!("Invalid offset {:?}: {}", args[2], e);
                    std::process::exit(1);
                }
            };
            gallery(offset)
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn gallery(offset_percent: f64) {
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let output_path = manifest_dir.join("../gallery.html");
    let options = BorderOptions::default().with_offset_percent(offset_percent);

    // Each row gets its own registry so rows render independently
    let rows: Vec<(&'static str, Vec<(f64, String)>)> = SAMPLES
        .par_iter()
        .map(|sample| {
            tracing::info!(sample = sample.name, "rendering");
            let mut borders = ProgressBorders::new();
            let cells = LEVELS
                .iter()
                .enumerate()
                .map(|(i, &level)| {
                    let mut element = StaticElement::new(i as u64, sample.width, sample.height);
                    if let Some(radius) = sample.border_radius {
                        element = element.with_border_radius(radius);
                    }
                    borders.create_progress_border(&mut element, level, "#2e7d32", "#e0e0e0", &options);
                    borders.run_animation_frame(ElementId(i as u64));
                    let markup = borders.markup(ElementId(i as u64)).unwrap_or_default();
                    (level, markup)
                })
                .collect();
            (sample.name, cells)
        })
        .collect();

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Progress border gallery</title>
    <style>
        body {
            font-family: system-ui, sans-serif;
            margin: 0;
            padding: 24px;
            background: #eee;
            color: #333;
        }
        h1 {
            font-weight: 600;
            font-size: 20px;
            margin: 0 0 24px 0;
        }
        .row {
            background: white;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.08);
            margin-bottom: 16px;
            padding: 12px 16px;
        }
        .row-title {
            font-weight: 600;
            font-size: 13px;
            margin-bottom: 8px;
        }
        .cells {
            display: flex;
            gap: 24px;
            align-items: flex-end;
        }
        .cell {
            text-align: center;
            font-size: 11px;
            color: #666;
        }
        .cell svg {
            position: static !important;
            display: block;
            margin-bottom: 4px;
        }
    </style>
</head>
<body>
"#,
    );
    html.push_str(&format!(
        "<h1>Progress border gallery (offset {}%)</h1>\n",
        offset_percent
    ));

    for (name, cells) in &rows {
        html.push_str("<div class=\"row\">\n");
        html.push_str(&format!("  <div class=\"row-title\">{}</div>\n", name));
        html.push_str("  <div class=\"cells\">\n");
        for (level, markup) in cells {
            html.push_str(&format!(
                "    <div class=\"cell\">{}<span>{}%</span></div>\n",
                markup, level
            ));
        }
        html.push_str("  </div>\n</div>\n");
    }
    html.push_str("</body>\n</html>\n");

    if let Err(e) = fs::write(&output_path, html) {
        eprintln!("Failed to write {}: {}", output_path, e);
        std::process::exit(1);
    }

    println!("Wrote {} ({} samples)", output_path, rows.len());
}
