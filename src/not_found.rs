use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Page Not Found",
            "404",
            "Sorry, that page does not exist.",
            "Check the address, or head back to the expenses page.",
        ),
    )
        .into_response()
}

#[cfg(test)]
mod not_found_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{AppState, build_router};

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = build_router(AppState::new(Vec::new(), "Etc/UTC"));
        let server = TestServer::new(app);

        let response = server.get("/definitely/not/a/route").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
