//! Built-in preset catalog.

use serde_json::json;
use sora_models::Preset;

/// Read-only collection of presets, looked up by id.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    pub fn new(presets: Vec<Preset>) -> Self {
        Self { presets }
    }

    /// The curated presets shipped with the studio.
    pub fn builtin() -> Self {
        Self::new(vec![
            preset(
                "product-launch",
                "Product launch",
                "Premium hero film for a consumer tech launch.",
                "Open on a dark studio with a single beam of light revealing a matte black \
                 smartphone on a rotating pedestal. Slow dolly-in as reflections glide across \
                 the glass. Cut to macro shots of the camera module and the edge finish. \
                 End on the product floating over a gradient backdrop with the tagline \
                 'Made to be seen'.",
                Some(json!({
                    "duration": 30,
                    "aspect_ratio": "16:9",
                    "style": "cinematic",
                    "camera": { "lens": "85mm", "depth_of_field": "shallow" },
                    "lighting": "low-key studio, rim light",
                    "soundtrack": "minimal electronic pulse, building to a hit on the logo"
                })),
            ),
            preset(
                "nature-documentary",
                "Nature documentary",
                "Wildlife sequence with documentary pacing and narration.",
                "At dawn over a misty mangrove forest, a heron stands motionless in shallow \
                 water. Aerial shot descends through the canopy into a steady telephoto \
                 close-up. The heron strikes, catching a fish, as the sun breaks through the \
                 fog. Calm, authoritative narration describes the hunt.",
                Some(json!({
                    "duration": 45,
                    "aspect_ratio": "16:9",
                    "style": "documentary",
                    "voice_over": { "language": "en-US", "tone": "calm" },
                    "color_grade": "natural, soft greens"
                })),
            ),
            preset(
                "fashion-vertical",
                "Fashion reel",
                "Vertical high-fashion clip for social feeds.",
                "A model walks through a neon-lit alley at night wearing a reflective trench \
                 coat. Quick cuts between full-body tracking shots and slow-motion details of \
                 fabric catching the light. Rain on the pavement mirrors the neon signs.",
                Some(json!({
                    "duration": 15,
                    "aspect_ratio": "9:16",
                    "style": "high fashion",
                    "editing": { "pace": "fast", "transitions": "hard cuts on the beat" }
                })),
            ),
            preset(
                "city-timelapse",
                "City timelapse",
                "Prompt-only preset; the model picks the technical parameters.",
                "A day-to-night timelapse of a coastal city skyline, clouds racing overhead, \
                 streets lighting up as the sun sets into the ocean.",
                None,
            ),
        ])
    }

    pub fn find(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

fn preset(
    id: &str,
    title: &str,
    description: &str,
    prompt: &str,
    config: Option<serde_json::Value>,
) -> Preset {
    Preset {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        prompt: prompt.to_string(),
        config: config.and_then(|value| value.as_object().cloned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_unique() {
        let catalog = PresetCatalog::builtin();
        let ids: HashSet<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_presets_pass_local_validation() {
        for preset in PresetCatalog::builtin().iter() {
            let form = crate::form::validate_form(&preset.prompt, &preset.config_text())
                .unwrap_or_else(|e| panic!("preset {} invalid: {}", preset.id, e));
            assert_eq!(form.config, preset.config);
        }
    }

    #[test]
    fn test_find() {
        let catalog = PresetCatalog::builtin();
        assert_eq!(
            catalog.find("product-launch").map(|p| p.title.as_str()),
            Some("Product launch")
        );
        assert!(catalog.find("city-timelapse").unwrap().config.is_none());
        assert!(catalog.find("missing").is_none());
    }
}
