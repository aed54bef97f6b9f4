/// GET /api/healthz
pub async fn health_handler() -> &'static str {
    "OK"
}
