//! Full search → translate workflow against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives a `Session` over
//! real HTTP using ureq. Validates that request building, response parsing
//! and session state transitions work end-to-end with the actual server,
//! including the error paths the backend can produce.

use catalog_core::session::{SEARCH_FAILED, TRANSLATE_FAILED};
use catalog_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Session};

/// Execute an `HttpRequest` using ureq, mapping transport failures into
/// `ApiError::TransportError` the way a real host would.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
    };

    let mut response = result.map_err(|e| ApiError::TransportError(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

/// Start the mock server on a random port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn search_translate_workflow() {
    let mut session = Session::new(&start_server());

    // Step 1: translate before any search, nothing is built or sent.
    let err = session.build_translate("it").unwrap_err();
    assert!(matches!(err, ApiError::NoBookSelected));

    // Step 2: search for a seeded book.
    let req = session.build_search("Dune");
    session.apply_search(execute(req));
    let book = session.selected_book().expect("book selected after search");
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert!(session.results().contains("Author: Frank Herbert"));
    assert_eq!(session.translation(), "");

    // Step 3: translate the description.
    let req = session.build_translate("it").unwrap();
    session.apply_translate(execute(req));
    assert!(session
        .translation()
        .starts_with("Translated description:\n[it] "));

    // Step 4: unknown title, the server's message is rendered and the
    // previous selection survives.
    let req = session.build_search("No Such Book");
    session.apply_search(execute(req));
    assert_eq!(session.results(), "Book not found");
    assert_eq!(session.selected_book().unwrap().title, "Dune");

    // Step 5: the stale selection is still translatable.
    let req = session.build_translate("pl").unwrap();
    session.apply_translate(execute(req));
    assert!(session
        .translation()
        .starts_with("Translated description:\n[pl] "));

    // Step 6: empty title, the backend's validation message is rendered.
    let req = session.build_search("");
    session.apply_search(execute(req));
    assert_eq!(session.results(), "Title parameter is required");

    // Step 7: unsupported language, the message lands in the translation
    // region.
    let req = session.build_translate("de").unwrap();
    session.apply_translate(execute(req));
    assert!(session.translation().starts_with("Invalid target language."));

    // Step 8: a multi-word title survives URL encoding both ways.
    let req = session.build_search("The Left Hand of Darkness");
    session.apply_search(execute(req));
    assert_eq!(
        session.selected_book().unwrap().author,
        "Ursula K. Le Guin"
    );
    assert_eq!(session.translation(), "");
}

#[test]
fn transport_failure_renders_generic_messages() {
    // Bind a listener to reserve a port, then drop it so nothing answers.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut session = Session::new(&format!("http://{addr}"));

    let req = session.build_search("Dune");
    session.apply_search(execute(req));
    assert_eq!(session.results(), SEARCH_FAILED);
    assert!(session.selected_book().is_none());

    // Give the session a book first, then fail the translate leg.
    session.apply_search(Ok(HttpResponse {
        status: 200,
        headers: Vec::new(),
        body: r#"{"Title":"Dune","Author":"Frank Herbert","Description":"Sand."}"#.to_string(),
    }));
    let req = session.build_translate("it").unwrap();
    session.apply_translate(execute(req));
    assert_eq!(session.translation(), TRANSLATE_FAILED);
    assert_eq!(session.selected_book().unwrap().title, "Dune");
}
