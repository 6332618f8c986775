// SPDX-License-Identifier: MPL-2.0
//! End-to-end flow: listing file → catalog → gallery viewer → inquiry
//! pipeline with stubbed mail delivery.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use vitrina::catalog::ImageId;
use vitrina::error::MailError;
use vitrina::gallery::{Direction, GalleryViewer};
use vitrina::inquiry::{self, Inquiry, MailRoute, Outcome};
use vitrina::listing::Listing;
use vitrina::mail::{Mailer, OutboundMessage};

struct RecordingMailer {
    fail: bool,
    sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingMailer {
    fn new(fail: bool) -> Self {
        Self {
            fail,
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl Mailer for RecordingMailer {
    fn deliver(&self, message: OutboundMessage) -> BoxFuture<'static, Result<(), MailError>> {
        self.sent.lock().expect("mailer lock").push(message);
        let result = if self.fail {
            Err(MailError::Transport("stubbed outage".to_string()))
        } else {
            Ok(())
        };
        async move { result }.boxed()
    }
}

fn route() -> MailRoute {
    MailRoute {
        sender: "ventas@example.com".to_string(),
        recipient: "asesoria@example.com".to_string(),
        subject: "Interesado en casa laureles".to_string(),
    }
}

#[test]
fn listing_file_drives_the_gallery_viewer() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("listing.toml");
    std::fs::write(
        &path,
        r#"
title = "Casa Campestre"
tagline = "Rodeada de naturaleza"

[[images]]
id = 10
source = "/fotos/frente.jpg"
alt_text = "Frente"
aspect_ratio = "3/4"

[[images]]
id = 20
source = "/fotos/patio.jpg"
alt_text = "Patio"
aspect_ratio = "16/9"

[[images]]
id = 30
source = "/fotos/cocina.jpg"
alt_text = "Cocina"
"#,
    )
    .expect("failed to write listing");

    let listing = Listing::load_from_path(&path).expect("listing parses");
    let catalog = listing.catalog().expect("catalog is valid");
    let mut viewer = GalleryViewer::new(catalog);

    // Open the last image and walk the ring in both directions.
    viewer.open(ImageId(30)).expect("id is in catalog");
    assert_eq!(viewer.navigate(Direction::Next), Ok(ImageId(10)));
    assert_eq!(viewer.navigate(Direction::Previous), Ok(ImageId(30)));

    // A full lap lands back on the starting image.
    for _ in 0..3 {
        viewer.navigate(Direction::Next).expect("selection active");
    }
    assert!(viewer.is_selected(ImageId(30)));

    viewer.close();
    assert!(!viewer.has_selection());
}

#[tokio::test]
async fn inquiry_pipeline_reports_both_outcomes() {
    let inquiry = Inquiry {
        name: "Ana".to_string(),
        surname: "Gomez".to_string(),
        email: "a@x.com".to_string(),
        phone: "300".to_string(),
        message: "Hola".to_string(),
    };

    let reachable = Arc::new(RecordingMailer::new(false));
    let outcome = inquiry::submit(reachable.clone(), route(), inquiry.clone()).await;
    assert_eq!(outcome, Outcome::Sent);

    let sent = reachable.sent.lock().expect("mailer lock");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "asesoria@example.com");
    assert!(sent[0].body_html.contains("Hola soy Ana Gomez"));
    drop(sent);

    let unreachable = Arc::new(RecordingMailer::new(true));
    let outcome = inquiry::submit(unreachable.clone(), route(), inquiry).await;
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(unreachable.sent.lock().expect("mailer lock").len(), 1);
}

#[tokio::test]
async fn default_listing_supports_the_full_visitor_flow() {
    let listing = Listing::default();
    let catalog = listing.catalog().expect("default catalog is valid");
    let mut viewer = GalleryViewer::new(catalog);

    // Browse a few images the way a visitor would.
    let first = listing.hero_image().expect("listing has images");
    viewer.open(first).expect("hero image is in catalog");
    viewer.navigate(Direction::Next).expect("selection active");
    viewer.navigate(Direction::Next).expect("selection active");
    viewer.close();

    // Then send an inquiry.
    let mailer = Arc::new(RecordingMailer::new(false));
    let outcome = inquiry::submit(
        mailer.clone(),
        route(),
        Inquiry {
            name: "Luis".to_string(),
            surname: "Rojas".to_string(),
            email: "luis@y.com".to_string(),
            phone: "311".to_string(),
            message: "Quisiera agendar una visita".to_string(),
        },
    )
    .await;

    assert_eq!(outcome, Outcome::Sent);
    let sent = mailer.sent.lock().expect("mailer lock");
    assert!(sent[0].body_html.contains("Quisiera agendar una visita"));
}
