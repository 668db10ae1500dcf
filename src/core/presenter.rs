//! Renders a resolved `BusinessProfile` into the single-page site.
//!
//! Every function here is pure: the same profile and options always produce
//! the same markup. Business fields are printed verbatim (maud escapes them);
//! the contact address is the one exception, see [`format_address`].

use crate::domain::model::{BusinessProfile, Contact, History, PageOptions, Service};
use maud::{html, Markup, DOCTYPE};

pub const ANCHOR_SAVOIR_FAIRE: &str = "savoir-faire";
pub const ANCHOR_SERVICES: &str = "services";
pub const ANCHOR_CONTACT: &str = "contact";

const NAV_LINKS: [(&str, &str); 3] = [
    ("Savoir-faire", ANCHOR_SAVOIR_FAIRE),
    ("Services", ANCHOR_SERVICES),
    ("Contact", ANCHOR_CONTACT),
];

pub fn render_page(profile: &BusinessProfile, options: &PageOptions) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(options.language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (options.site_name) " | " (options.tagline) }
                meta name="description" content=(profile.history.description);
                @if let Some(href) = &options.stylesheet {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                (navbar(options))
                main {
                    (hero(&profile.history))
                    (certifications(&profile.certifications))
                    (services(&profile.services))
                    (history(&profile.history, &profile.values))
                    (contact(&profile.contact, &profile.services))
                }
                (footer(&profile.history, options))
            }
        }
    }
}

pub fn render_document(profile: &BusinessProfile, options: &PageOptions) -> String {
    render_page(profile, options).into_string()
}

/// Inserts a line break right after the first comma. Any other comma, and an
/// address without one, is left as-is.
pub fn format_address(address: &str) -> Markup {
    match address.split_once(',') {
        Some((head, tail)) => html! { (head) "," br; (tail) },
        None => html! { (address) },
    }
}

fn brand(options: &PageOptions) -> Markup {
    html! {
        div class="brand" {
            span class="brand-name" { (options.site_name.to_uppercase()) }
            span class="brand-tagline" { (options.tagline) }
        }
    }
}

fn navbar(options: &PageOptions) -> Markup {
    html! {
        nav class="navbar" {
            (brand(options))
            ul class="nav-links" {
                @for (label, anchor) in NAV_LINKS {
                    li { a href={ "#" (anchor) } { (label) } }
                }
            }
            a class="cta" href={ "#" (ANCHOR_CONTACT) } { "Devis Gratuit" }
        }
    }
}

fn hero(history: &History) -> Markup {
    html! {
        section class="hero" {
            @if !history.founded.is_empty() {
                span class="hero-kicker" { "Depuis " (history.founded) }
            }
            h1 {
                "L'Art du Bois, " br;
                em { "la Maîtrise du Temps." }
            }
            p class="hero-lead" {
                "Menuiserie sur-mesure pour l'habitat contemporain et la restauration du patrimoine."
            }
            div class="hero-actions" {
                a class="cta" href={ "#" (ANCHOR_SERVICES) } { "Découvrir nos réalisations" }
                a class="cta-secondary" href={ "#" (ANCHOR_SAVOIR_FAIRE) } { "Notre Histoire" }
            }
        }
    }
}

fn certifications(labels: &[String]) -> Markup {
    html! {
        @if !labels.is_empty() {
            div class="certifications" {
                @for label in labels {
                    span class="certification" { (label) }
                }
            }
        }
    }
}

fn service_card(service: &Service) -> Markup {
    html! {
        article class="service-card" {
            @if !service.title.is_empty() {
                h3 { (service.title) }
            }
            @if !service.description.is_empty() {
                p { (service.description) }
            }
            @if !service.items.is_empty() {
                ul {
                    @for item in &service.items {
                        li { (item) }
                    }
                }
            }
        }
    }
}

fn services(services: &[Service]) -> Markup {
    html! {
        section id=(ANCHOR_SERVICES) class="services" {
            header {
                span class="kicker" { "Nos Domaines d'Intervention" }
                h2 { "Des solutions sur-mesure pour chaque besoin." }
            }
            div class="service-grid" {
                @for service in services {
                    (service_card(service))
                }
            }
        }
    }
}

fn history(history: &History, values: &[String]) -> Markup {
    html! {
        section id=(ANCHOR_SAVOIR_FAIRE) class="history" {
            span class="kicker" { "Héritage & Passion" }
            h2 { "Une Tradition Familiale " em { "Ininterrompue." } }
            @if !history.description.is_empty() {
                p class="history-description" { (history.description) }
            }
            @if !values.is_empty() {
                ul class="values" {
                    @for value in values {
                        li class="value" { (value) }
                    }
                }
            }
        }
    }
}

fn contact_line(label: &str, value: Markup) -> Markup {
    html! {
        div class="contact-line" {
            p class="contact-label" { (label) }
            p class="contact-value" { (value) }
        }
    }
}

fn contact(contact: &Contact, services: &[Service]) -> Markup {
    html! {
        section id=(ANCHOR_CONTACT) class="contact" {
            div class="contact-details" {
                h2 { "Parlons de votre projet" }
                @if !contact.phone.is_empty() {
                    (contact_line("Téléphone", html! { (contact.phone) }))
                }
                @if !contact.email.is_empty() {
                    (contact_line("Email", html! { (contact.email) }))
                }
                @if !contact.address.is_empty() {
                    (contact_line("Adresse", format_address(&contact.address)))
                }
                @if !contact.hours.is_empty() {
                    (contact_line("Horaires", html! { (contact.hours) }))
                }
            }
            // 表單僅供展示，不會送出資料
            form class="contact-form" {
                label { "Nom complet" input type="text" name="name" placeholder="Jean Dupont"; }
                label { "Email" input type="email" name="email" placeholder="jean@email.com"; }
                label {
                    "Sujet"
                    select name="subject" {
                        @for service in services {
                            option { (service.title) }
                        }
                        option { "Autre" }
                    }
                }
                label {
                    "Message"
                    textarea name="message" rows="4" placeholder="Décrivez votre projet..." {}
                }
                button type="button" { "Envoyer ma demande" }
            }
        }
    }
}

fn footer(history: &History, options: &PageOptions) -> Markup {
    html! {
        footer class="footer" {
            (brand(options))
            @if !history.description.is_empty() {
                p class="footer-description" { (history.description) }
            }
            nav class="footer-nav" {
                h4 { "Navigation" }
                ul {
                    li { a href="#" { "Accueil" } }
                    @for (label, anchor) in NAV_LINKS {
                        li { a href={ "#" (anchor) } { (label) } }
                    }
                }
            }
            nav class="footer-legal" {
                h4 { "Légal" }
                ul {
                    li { a href="#" { "Mentions Légales" } }
                    li { a href="#" { "Politique de Confidentialité" } }
                    li { a href="#" { "CGV" } }
                }
            }
            p class="copyright" {
                "© " (options.copyright_year) " " (options.site_name) " Menuiserie. Tous droits réservés."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fallback::fallback_profile;

    fn service(title: &str) -> Service {
        Service {
            title: title.to_string(),
            description: format!("{} description", title),
            items: vec![format!("{} item", title)],
        }
    }

    fn empty_profile() -> BusinessProfile {
        BusinessProfile {
            history: History {
                founded: String::new(),
                description: String::new(),
            },
            services: vec![],
            certifications: vec![],
            values: vec![],
            contact: Contact {
                address: String::new(),
                phone: String::new(),
                email: String::new(),
                hours: String::new(),
            },
        }
    }

    #[test]
    fn test_one_card_per_service_in_input_order() {
        let mut profile = fallback_profile();
        profile.services = vec![service("Zeta"), service("Alpha"), service("Alpha"), service("Mid")];

        let html = render_document(&profile, &PageOptions::default());

        assert_eq!(html.matches(r#"class="service-card""#).count(), 4);
        let grid = &html[html.find("service-grid").unwrap()..];
        let zeta = grid.find("<h3>Zeta</h3>").unwrap();
        let alpha = grid.find("<h3>Alpha</h3>").unwrap();
        let mid = grid.find("<h3>Mid</h3>").unwrap();
        assert!(zeta < alpha && alpha < mid);
        assert_eq!(grid.matches("<h3>Alpha</h3>").count(), 2);
    }

    #[test]
    fn test_empty_profile_renders_empty_grid() {
        let html = render_document(&empty_profile(), &PageOptions::default());

        assert!(html.contains(r#"<div class="service-grid"></div>"#));
        assert_eq!(html.matches(r#"class="service-card""#).count(), 0);
        assert!(!html.contains("contact-line"));
        assert!(!html.contains(r#"class="certifications""#));
        assert!(!html.contains("Depuis"));
    }

    #[test]
    fn test_anchor_targets_are_present() {
        let html = render_document(&fallback_profile(), &PageOptions::default());

        for anchor in [ANCHOR_SAVOIR_FAIRE, ANCHOR_SERVICES, ANCHOR_CONTACT] {
            assert!(html.contains(&format!(r#"id="{}""#, anchor)), "missing #{}", anchor);
            assert!(html.contains(&format!(r##"href="#{}""##, anchor)));
        }
    }

    #[test]
    fn test_address_breaks_after_first_comma_only() {
        assert_eq!(
            format_address("Zone Artisanale, 12345 Ville").into_string(),
            "Zone Artisanale,<br> 12345 Ville"
        );
        assert_eq!(
            format_address("Atelier, 3 rue Haute, Lyon").into_string(),
            "Atelier,<br> 3 rue Haute, Lyon"
        );
        assert_eq!(format_address("Lyon").into_string(), "Lyon");
        assert_eq!(format_address("").into_string(), "");
    }

    #[test]
    fn test_rendered_address_has_a_single_break() {
        let html = render_document(&fallback_profile(), &PageOptions::default());
        let start = html.find("Zone Artisanale").unwrap();
        let end = start + html[start..].find("</p>").unwrap();

        assert_eq!(&html[start..end], "Zone Artisanale,<br> 12345 Ville");
    }

    #[test]
    fn test_fields_are_escaped_not_interpreted() {
        let mut profile = fallback_profile();
        profile.history.description = "<script>alert(1)</script>".to_string();

        let html = render_document(&profile, &PageOptions::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_hours_and_stylesheet_are_optional() {
        let mut profile = fallback_profile();
        profile.contact.hours = String::new();
        let html = render_document(&profile, &PageOptions::default());
        assert!(!html.contains("Horaires"));
        assert!(!html.contains("stylesheet"));

        let options = PageOptions {
            stylesheet: Some("/site.css".to_string()),
            copyright_year: 2031,
            ..PageOptions::default()
        };
        let html = render_document(&fallback_profile(), &options);
        assert!(html.contains("Horaires"));
        assert!(html.contains(r#"href="/site.css""#));
        assert!(html.contains("© 2031 Consola Menuiserie"));
    }

    #[test]
    fn test_rendering_does_not_mutate_profile() {
        let profile = fallback_profile();
        let _ = render_document(&profile, &PageOptions::default());
        assert_eq!(profile, fallback_profile());
    }
}
