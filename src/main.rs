use wpt_reader::WptDocument;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-wpt-file>", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    println!("Reading WPT file: {}", path);
    println!("{}", "=".repeat(60));

    match WptDocument::open(path) {
        Ok(document) => {
            println!("\nPage Layout:");
            println!("  Lines per page: {}", document.linecount.total_lines);
            println!(
                "  Top margin/space: {} / {}",
                document.linecount.top_margin, document.linecount.top_space
            );
            println!(
                "  Bottom space/margin: {} / {}",
                document.linecount.bottom_space, document.linecount.bottom_margin
            );
            println!(
                "  Left/right margin: {} / {}",
                document.margin.left_margin, document.margin.right_margin
            );
            println!("  Line spacing: {}", document.margin.line_spacing);
            if !document.margin.tab_stops.is_empty() {
                println!("  Tab stops: {:?}", document.margin.tab_stops);
            }

            if let Some(header) = &document.header {
                println!("\nHeader: {}", header.text);
            }
            if let Some(footer) = &document.footer {
                println!("\nFooter: {}", footer.text);
            }

            if !document.warnings.is_empty() {
                println!("\nWarnings:");
                for warning in &document.warnings {
                    println!("  - {}", warning);
                }
            }

            println!("\n{}", "=".repeat(60));
            println!("{}", document.body);
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read WPT file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
