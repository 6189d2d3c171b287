//! `folio config` - print the effective settings

use anyhow::Result;
use std::path::Path;

use folio_core::settings::Settings;

pub fn execute_config(settings: &Settings, path: &Path, json: bool) -> Result<()> {
    let theme = settings.effective_theme();
    let (dark, light) = theme.variables();

    if json {
        let output = serde_json::json!({
            "path": path,
            "exists": path.exists(),
            "settings": settings,
            "theme": {
                "name": theme,
                "colors": theme.colors(),
                "color_dark": dark,
                "color_light": light,
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let status = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("Settings: {}{}", path.display(), status);
    println!("  page_size: {}", settings.page_size);
    match &settings.catalog {
        Some(catalog) => println!("  catalog:   {}", catalog.display()),
        None => println!("  catalog:   (bundled sample)"),
    }
    println!("  theme:     {theme}");
    println!("    --color-dark:  {dark}");
    println!("    --color-light: {light}");

    Ok(())
}
