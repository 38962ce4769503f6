// src/banner.rs

/// Prints the startup banner to the console.
pub fn print_banner() {
    let banner = r#"
     _      _ _                                          _ _      _
  __| | ___| (_)_   _____ _ __ _   _   _ __  _ __ ___  __| (_) ___| |_
 / _` |/ _ \ | \ \ / / _ \ '__| | | | | '_ \| '__/ _ \/ _` | |/ __| __|
| (_| |  __/ | |\ V /  __/ |  | |_| | | |_) | | |  __/ (_| | | (__| |_
 \__,_|\___|_|_| \_/ \___|_|   \__, | | .__/|_|  \___|\__,_|_|\___|\__|
                               |___/  |_|

    Delivery Time Prediction Client
"#;
    println!("{}", banner);
}
