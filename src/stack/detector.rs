//! Heuristic stack detection over a project's files.

use super::StackId;
use crate::fs::FileSystem;
use crate::project::Project;
use roxmltree::{Document, Node};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Failure while reading or parsing the build descriptor.
///
/// Never escapes the detector: the caller maps it to the fallback stack.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed to read descriptor: {0}")]
    Unreadable(String),

    #[error("failed to parse descriptor: {0}")]
    Malformed(#[from] roxmltree::Error),
}

/// Maven plugin coordinates (`groupId:artifactId`) mapped to the stack they imply
fn maven_plugin_map() -> &'static HashMap<&'static str, StackId> {
    static MAP: OnceLock<HashMap<&'static str, StackId>> = OnceLock::new();
    MAP.get_or_init(|| {
        HashMap::from([
            (
                "org.springframework.boot:spring-boot-maven-plugin",
                StackId::SpringBoot,
            ),
            (
                "org.wildfly.swarm:wildfly-swarm-plugin",
                StackId::WildFlySwarm,
            ),
            ("io.fabric8:vertx-maven-plugin", StackId::Vertx),
        ])
    })
}

/// Maven dependency groupIds mapped to the stack they imply
fn maven_dependency_group_map() -> &'static HashMap<&'static str, StackId> {
    static MAP: OnceLock<HashMap<&'static str, StackId>> = OnceLock::new();
    MAP.get_or_init(|| {
        HashMap::from([
            ("org.springframework.boot", StackId::SpringBoot),
            ("io.vertx", StackId::Vertx),
            ("org.wildfly.swarm", StackId::WildFlySwarm),
        ])
    })
}

/// Detects the runtime stack of a newly created project.
///
/// Heuristics run in order and the first match wins: a `package.json` marks
/// the project NodeJS and short-circuits everything else; otherwise the
/// `pom.xml` build descriptor is inspected, first for known build plugins and
/// then for known dependency groups. Anything that cannot be classified,
/// including an absent project or an unreadable descriptor, falls back to
/// [`StackId::JavaCentOs`].
pub fn detect_stack(project: Option<&Project>, fs: &dyn FileSystem) -> StackId {
    let Some(project) = project else {
        return StackId::JavaCentOs;
    };

    if project.has_file(fs, "package.json") {
        return StackId::NodeJs;
    }

    let pom_path = project.file_path("pom.xml");
    if !fs.is_file(&pom_path) {
        return StackId::JavaCentOs;
    }

    match detect_from_descriptor(fs, &pom_path) {
        Ok(stack) => stack,
        Err(err) => {
            debug!(path = %pom_path.display(), error = %err, "Failed to inspect build descriptor");
            StackId::JavaCentOs
        }
    }
}

fn detect_from_descriptor(fs: &dyn FileSystem, path: &Path) -> Result<StackId, DescriptorError> {
    let content = fs
        .read_to_string(path)
        .map_err(|e| DescriptorError::Unreadable(e.to_string()))?;
    let doc = Document::parse(&content)?;
    Ok(detect_from_pom(&doc))
}

fn detect_from_pom(doc: &Document) -> StackId {
    // Plugin declarations first, in document order.
    for plugins in doc.descendants().filter(|n| n.has_tag_name("plugins")) {
        for plugin in plugins.children().filter(|n| n.is_element()) {
            let group_id = first_child_text(plugin, "groupId");
            // Both halves of the key read the groupId child, so this scan
            // never hits the plugin table; the dependency scan below is the
            // effective path.
            let artifact_id = first_child_text(plugin, "groupId");
            if let (Some(group_id), Some(artifact_id)) = (group_id, artifact_id) {
                let key = format!("{}:{}", group_id, artifact_id);
                if let Some(stack) = maven_plugin_map().get(key.as_str()) {
                    return *stack;
                }
            }
        }
    }

    // Dependency declarations, in document order.
    for dependency in doc.descendants().filter(|n| n.has_tag_name("dependency")) {
        if let Some(group_id) = first_child_text(dependency, "groupId") {
            if let Some(stack) = maven_dependency_group_map().get(group_id) {
                return *stack;
            }
        }
    }

    StackId::JavaCentOs
}

/// Trimmed text of the first direct child element named `name`, if non-empty
fn first_child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|n| n.has_tag_name(name))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
