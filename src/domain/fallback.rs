use crate::domain::model::{BusinessProfile, Contact, History, Service};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The record used whenever remote resolution is skipped or fails.
pub fn fallback_profile() -> BusinessProfile {
    BusinessProfile {
        history: History {
            founded: "1945".to_string(),
            description: "Une entreprise familiale perpétuant le savoir-faire de la menuiserie traditionnelle et moderne depuis plus de 75 ans.".to_string(),
        },
        services: vec![
            Service {
                title: "Menuiserie Extérieure".to_string(),
                description: "Fenêtres, portes et volets en Bois, Aluminium et PVC alliant performance thermique et esthétique.".to_string(),
                items: strings(&[
                    "Fenêtres & Portes-fenêtres",
                    "Portes d'entrée",
                    "Volets battants & roulants",
                ]),
            },
            Service {
                title: "Aménagement Intérieur".to_string(),
                description: "Créations sur-mesure pour sublimer votre habitat : escaliers, dressings et cuisines.".to_string(),
                items: strings(&["Escaliers", "Dressings & Placards", "Cuisines sur-mesure"]),
            },
            Service {
                title: "Patrimoine & Monuments".to_string(),
                description: "Spécialiste de la restauration de menuiseries anciennes et monuments historiques.".to_string(),
                items: strings(&[
                    "Restauration à l'identique",
                    "Respect des techniques anciennes",
                    "Accompagnement ABF",
                ]),
            },
        ],
        certifications: strings(&["RGE", "Qualibat", "Menuiserie de France"]),
        values: strings(&["Excellence", "Transmission", "Innovation", "Proximité"]),
        contact: Contact {
            address: "Zone Artisanale, 12345 Ville".to_string(),
            phone: "01 02 03 04 05".to_string(),
            email: "contact@consolamenuiserie.fr".to_string(),
            hours: "Lun - Ven : 8h00 - 18h00".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(fallback_profile(), fallback_profile());
    }

    #[test]
    fn test_fallback_has_no_empty_required_strings() {
        let profile = fallback_profile();
        assert!(!profile.history.founded.is_empty());
        assert_eq!(profile.services.len(), 3);
        assert!(profile.services.iter().all(|s| !s.title.is_empty()));
        assert!(!profile.contact.email.is_empty());
    }
}
