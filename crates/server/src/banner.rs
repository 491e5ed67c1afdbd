pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
 ┌┬┐┌─┐   ┌─┐┬─┐┌─┐─┐ ┬┬ ┬
  │ │ ┬───├─┘├┬┘│ │┌┴┬┘└┬┘    telegram-proxy
  ┴ └─┘   ┴  ┴└─└─┘┴ └─ ┴     v{}
"#,
        version
    );

    tracing::info!("{}", banner);
}
