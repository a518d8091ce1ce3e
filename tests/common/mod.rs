use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral local port
pub async fn spawn_mock(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind mock server");
    let addr = listener.local_addr().expect("Should have local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock server failed");
    });
    addr
}

/// A local address with nothing listening on it
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind");
    let addr = listener.local_addr().expect("Should have local addr");
    drop(listener);
    addr
}
