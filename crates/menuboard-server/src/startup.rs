//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    __  ___                  __                         __
   /  |/  /__  ____  __  __ / /_  ____  ____ __________/ /
  / /|_/ / _ \/ __ \/ / / // __ \/ __ \/ __ `/ ___/ __  /
 / /  / /  __/ / / / /_/ // /_/ / /_/ / /_/ / /  / /_/ /
/_/  /_/\___/_/ /_/\__,_//_.___/\____/\__,_/_/   \__,_/

                    Menu Catalog Service
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}/menu", port);
    info!("Health:    http://0.0.0.0:{}/health", port);
    info!("API Docs:  http://0.0.0.0:{}/swagger-ui", port);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(8080);
    }
}
