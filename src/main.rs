//! wjournal main entrypoint.

use wjournal::run;
use wjournal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
