use crate::models::light::Light;

/// Resolve user-supplied name tokens against the bridge's light list.
///
/// Each token contributes every light whose name matches it exactly
/// (case-sensitive), in the bridge's enumeration order. A token matching
/// nothing contributes nothing and is not an error; duplicate names all
/// match. Light counts are single or double digits at home scale, so a
/// nested scan beats building an index.
pub fn resolve_lights(tokens: &[String], all_lights: &[Light]) -> Vec<Light> {
    let mut results = Vec::new();
    for token in tokens {
        for light in all_lights {
            if light.name == *token {
                results.push(light.clone());
            }
        }
    }
    results
}
