pub const GREETING: &str = "ADNF Discord Bot by NukedBart";

pub async fn index() -> &'static str {
    GREETING
}
