use crate::app::screen::{FailureKind, LoadStatus, PharmacyCard, PharmacyScreen};
use crate::core::links;
use crate::domain::contacts::DirectoryContact;
use crate::domain::model::PharmacyRecord;
use crate::domain::ports::{Clock, PharmacyDirectory};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

pub const OPEN_TITLE: &str = "ABERTAS AGORA";
pub const CLOSED_TITLE: &str = "FECHADAS AGORA";

/// Plain-text rendering of the two sections, or of the failure banner.
pub fn render_text<D: PharmacyDirectory, C: Clock>(screen: &PharmacyScreen<D, C>) -> String {
    TextListing(screen).to_string()
}

struct TextListing<'a, D: PharmacyDirectory, C: Clock>(&'a PharmacyScreen<D, C>);

impl<D: PharmacyDirectory, C: Clock> fmt::Display for TextListing<'_, D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let screen = self.0;

        match screen.status() {
            LoadStatus::Failed(kind) => {
                return writeln!(
                    f,
                    "Não foi possível carregar as farmácias ({}).",
                    failure_label(kind)
                );
            }
            // transient, never seen after activation returns
            LoadStatus::Idle | LoadStatus::Loading => return writeln!(f, "Carregando..."),
            LoadStatus::Cancelled => return writeln!(f, "Carregamento cancelado."),
            LoadStatus::Loaded => {}
        }

        if let Some(at) = screen.classified_at() {
            writeln!(f, "Horário de referência: {}", at)?;
        }

        write_section(f, OPEN_TITLE, screen.open_cards(), "Nenhuma farmácia aberta no momento.")?;
        write_section(f, CLOSED_TITLE, screen.closed_cards(), "Nenhuma farmácia fechada no momento.")
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    cards: &[PharmacyCard],
    empty: &str,
) -> fmt::Result {
    writeln!(f, "\n{} ({})", title, cards.len())?;
    if cards.is_empty() {
        return writeln!(f, "  {}", empty);
    }

    for card in cards {
        let record = card.record();
        let marker = if card.is_expanded() { "▾" } else { "▸" };
        writeln!(
            f,
            "  {} {}  {}–{}",
            marker, record.name, record.opens_at, record.closes_at
        )?;

        if card.is_expanded() {
            writeln!(f, "      Endereço: {}", record.address)?;
            writeln!(f, "      Telefone: {}", record.phone)?;
            writeln!(f, "      Ligar:    {}", card.call_link())?;
            writeln!(f, "      Maps:     {}", card.google_maps_link())?;
            writeln!(f, "      Waze:     {}", card.waze_link())?;
        }
    }

    Ok(())
}

fn failure_label(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::Network => "serviço indisponível",
        FailureKind::MalformedPayload => "resposta inválida",
        FailureKind::InvalidTimeFormat => "horário inválido",
    }
}

#[derive(Serialize)]
struct ListingJson<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<FailureKind>,
    at: Option<String>,
    open: Vec<&'a PharmacyRecord>,
    closed: Vec<&'a PharmacyRecord>,
}

pub fn render_json<D: PharmacyDirectory, C: Clock>(screen: &PharmacyScreen<D, C>) -> Result<String> {
    let listing = ListingJson {
        status: screen.status().label(),
        reason: match screen.status() {
            LoadStatus::Failed(kind) => Some(kind),
            _ => None,
        },
        at: screen.classified_at().map(|t| t.to_string()),
        open: screen.open_cards().iter().map(PharmacyCard::record).collect(),
        closed: screen.closed_cards().iter().map(PharmacyCard::record).collect(),
    };
    Ok(serde_json::to_string_pretty(&listing)?)
}

pub fn render_contacts(contacts: &[DirectoryContact]) -> String {
    let lines = contacts.iter().map(|contact| {
        format!(
            "  {}: {}  ({})\n",
            contact.name,
            contact.phone,
            links::call_link(&contact.phone)
        )
    });
    std::iter::once("+FARMÁCIAS\n".to_string()).chain(lines).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::domain::contacts::default_contacts;
    use async_trait::async_trait;

    struct Fixed(Vec<PharmacyRecord>);

    #[async_trait]
    impl PharmacyDirectory for Fixed {
        async fn fetch_all(&self) -> Result<Vec<PharmacyRecord>> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    #[async_trait]
    impl PharmacyDirectory for Broken {
        async fn fetch_all(&self) -> Result<Vec<PharmacyRecord>> {
            Err(crate::utils::error::FarmaError::UnexpectedStatus {
                status: 503,
                url: "http://localhost:3000/farmacias".to_string(),
            })
        }
    }

    struct Hanging;

    #[async_trait]
    impl PharmacyDirectory for Hanging {
        async fn fetch_all(&self) -> Result<Vec<PharmacyRecord>> {
            std::future::pending().await
        }
    }

    fn drogal() -> PharmacyRecord {
        PharmacyRecord {
            name: "Drogal".to_string(),
            address: "Rua Sete de Setembro, 100".to_string(),
            phone: "(14) 3642-3242".to_string(),
            latitude: -22.07,
            longitude: -48.74,
            opens_at: "08:00".to_string(),
            closes_at: "22:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_render_text_sections() {
        let mut screen = PharmacyScreen::new(Fixed(vec![drogal()]), FixedClock::at(10, 0));
        screen.activate().await;

        let collapsed = render_text(&screen);
        assert!(collapsed.contains("ABERTAS AGORA (1)"));
        assert!(collapsed.contains("FECHADAS AGORA (0)"));
        assert!(collapsed.contains("▸ Drogal  08:00–22:00"));
        assert!(!collapsed.contains("Endereço"));

        screen.open_cards_mut()[0].toggle();
        let expanded = render_text(&screen);
        assert!(expanded.contains("Endereço: Rua Sete de Setembro, 100"));
        assert!(expanded.contains("tel:(14)3642-3242"));
    }

    #[tokio::test]
    async fn test_render_failure_banner() {
        let mut screen = PharmacyScreen::new(Broken, FixedClock::at(10, 0));
        screen.activate().await;

        let text = render_text(&screen);
        assert!(text.starts_with("Não foi possível carregar as farmácias"));
        assert!(!text.contains("ABERTAS AGORA"));
    }

    #[tokio::test]
    async fn test_render_json() {
        let mut screen = PharmacyScreen::new(Fixed(vec![drogal()]), FixedClock::at(23, 0));
        screen.activate().await;

        let json: serde_json::Value = serde_json::from_str(&render_json(&screen).unwrap()).unwrap();
        assert_eq!(json["status"], "loaded");
        assert_eq!(json["at"], "23:00");
        assert_eq!(json["open"].as_array().unwrap().len(), 0);
        assert_eq!(json["closed"][0]["nome"], "Drogal");
    }

    #[tokio::test]
    async fn test_render_before_activation_and_after_teardown() {
        let screen = PharmacyScreen::new(Fixed(vec![drogal()]), FixedClock::at(10, 0));
        assert_eq!(render_text(&screen), "Carregando...\n");

        let mut screen = PharmacyScreen::new(Hanging, FixedClock::at(10, 0));
        screen.activate_until(async {}).await;
        assert_eq!(render_text(&screen), "Carregamento cancelado.\n");
    }

    #[test]
    fn test_render_contacts() {
        let text = render_contacts(&default_contacts());
        assert!(text.starts_with("+FARMÁCIAS\n"));
        assert!(text.contains("Drogasil: (14) 3642-6262  (tel:(14)3642-6262)\n"));
        assert_eq!(text.lines().count(), 4);
    }
}
