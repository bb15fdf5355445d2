mod entry;
mod system;

use reqgate::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
