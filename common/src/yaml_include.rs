use std::error::Error;
use std::fs;
use std::path::Path;
use yaml_rust2::{Yaml, YamlEmitter, YamlLoader};

type YamlResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

const MAX_INCLUDE_DEPTH: usize = 8;

pub fn load_yaml_with_includes(path: &Path) -> YamlResult<Yaml> {
    let res = process_includes_recursive(path, 0)?;
    tracing::debug!(path = %path.display(), "Processed config includes");
    Ok(res)
}

/// Loads `path` with includes resolved and renders the merged document back to YAML text.
pub fn render_yaml_with_includes(path: &Path) -> YamlResult<String> {
    let yaml = load_yaml_with_includes(path)?;
    let mut out = String::new();
    {
        let mut emitter = YamlEmitter::new(&mut out);
        emitter.dump(&yaml)?;
    }
    Ok(out)
}

fn process_includes_recursive(path: &Path, depth: usize) -> YamlResult<Yaml> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(format!("Include depth exceeded at {}", path.display()).into());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let base_path = path.parent().unwrap_or(Path::new(""));

    let (includes, rest): (Vec<&str>, Vec<&str>) = contents
        .lines()
        .partition(|&line| line.trim().starts_with("!include"));

    let mut merged_includes: Option<Yaml> = None;
    for line in includes {
        let include_path = line.trim().trim_start_matches("!include").trim();
        let included = process_includes_recursive(&base_path.join(include_path), depth + 1)
            .map_err(|e| format!("Failed to process include {}: {}", include_path, e))?;
        merged_includes = Some(match merged_includes {
            Some(acc) => merge_yaml(&acc, &included),
            None => included,
        });
    }

    let rest_yamls = YamlLoader::load_from_str(&rest.join("\n"))?;
    let merged_rest = rest_yamls
        .into_iter()
        .reduce(|acc: Yaml, doc: Yaml| merge_yaml(&acc, &doc));

    match (merged_includes, merged_rest) {
        (Some(includes), Some(rest)) => Ok(merge_yaml(&includes, &rest)),
        (Some(includes), None) => Ok(includes),
        (None, Some(rest)) => Ok(rest),
        (None, None) => Err(format!("Empty config document {}", path.display()).into()),
    }
}

fn merge_yaml(base: &Yaml, override_yaml: &Yaml) -> Yaml {
    match (base, override_yaml) {
        (Yaml::Hash(base_hash), Yaml::Hash(override_hash)) => {
            let mut result = base_hash.clone();
            for (key, value) in override_hash {
                match base_hash.get(key) {
                    Some(base_value) => {
                        result.insert(key.clone(), merge_yaml(base_value, value));
                    }
                    None => {
                        result.insert(key.clone(), value.clone());
                    }
                }
            }
            Yaml::Hash(result)
        }
        (_, override_value) => override_value.clone(),
    }
}
