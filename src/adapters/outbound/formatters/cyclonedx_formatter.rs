use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{DependencyGraph, PackageCoordinate, SbomMetadata};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(rename = "specVersion")]
    spec_version: String,
    version: u32,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    metadata: Metadata,
    components: Vec<Component>,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Serialize)]
struct Dependency {
    #[serde(rename = "ref")]
    bom_ref: String,
    #[serde(rename = "dependsOn", skip_serializing_if = "Vec::is_empty")]
    depends_on: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    component: Component,
    properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    name: String,
    version: String,
    purl: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON format
///
/// The graph root becomes `metadata.component`; every other coordinate is
/// listed once in `components`. Each node gets one `dependencies` entry,
/// and the purl doubles as the `bom-ref`.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, graph: &DependencyGraph, metadata: &SbomMetadata) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX".to_string(),
            spec_version: "1.6".to_string(),
            version: 1,
            serial_number: metadata.serial_number.clone(),
            metadata: self.build_metadata(graph, metadata),
            components: graph
                .components()
                .into_iter()
                .map(|c| self.build_component(c, "library"))
                .collect(),
            dependencies: self.build_dependencies(graph),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    fn build_metadata(&self, graph: &DependencyGraph, metadata: &SbomMetadata) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp.clone(),
            tools: vec![Tool {
                name: metadata.tool_name.clone(),
                version: metadata.tool_version.clone(),
            }],
            component: self.build_component(graph.root(), "application"),
            properties: vec![
                Property {
                    name: format!("{}:ecosystem", metadata.tool_name),
                    value: metadata.ecosystem.purl_type().to_string(),
                },
                Property {
                    name: format!("{}:analysis", metadata.tool_name),
                    value: metadata.analysis.to_string(),
                },
            ],
        }
    }

    fn build_component(&self, coordinate: &PackageCoordinate, component_type: &str) -> Component {
        let purl = coordinate.purl();
        Component {
            component_type: component_type.to_string(),
            bom_ref: purl.clone(),
            group: coordinate.namespace().map(str::to_string),
            name: coordinate.name().to_string(),
            version: coordinate.version().to_string(),
            purl,
        }
    }

    /// Root first, then components in first-seen order
    fn build_dependencies(&self, graph: &DependencyGraph) -> Vec<Dependency> {
        std::iter::once(graph.root())
            .chain(graph.components())
            .map(|node| Dependency {
                bom_ref: node.purl(),
                depends_on: graph
                    .dependencies_of(node)
                    .into_iter()
                    .map(PackageCoordinate::purl)
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{AnalysisType, Ecosystem};
    use serde_json::Value;

    fn cargo(name: &str, version: &str) -> PackageCoordinate {
        PackageCoordinate::new(Ecosystem::Cargo, name, version)
    }

    fn test_metadata() -> SbomMetadata {
        SbomMetadata {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            serial_number: "urn:uuid:test-123".to_string(),
            tool_name: "trustify-sbom".to_string(),
            tool_version: "1.0.0".to_string(),
            ecosystem: Ecosystem::Cargo,
            analysis: AnalysisType::Stack,
        }
    }

    fn render(graph: &DependencyGraph) -> Value {
        let json = CycloneDxFormatter::new()
            .format(graph, &test_metadata())
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_format_header_and_root() {
        let graph = DependencyGraph::new(cargo("app", "0.1.0"));
        let bom = render(&graph);

        assert_eq!(bom["bomFormat"], "CycloneDX");
        assert_eq!(bom["specVersion"], "1.6");
        assert_eq!(bom["serialNumber"], "urn:uuid:test-123");
        assert_eq!(bom["metadata"]["tools"][0]["name"], "trustify-sbom");
        assert_eq!(bom["metadata"]["component"]["type"], "application");
        assert_eq!(bom["metadata"]["component"]["purl"], "pkg:cargo/app@0.1.0");
        assert_eq!(bom["metadata"]["properties"][1]["value"], "stack");
        assert_eq!(bom["components"].as_array().unwrap().len(), 0);

        let dependencies = bom["dependencies"].as_array().unwrap();
        assert_eq!(dependencies.len(), 1);
        assert_eq!(dependencies[0]["ref"], "pkg:cargo/app@0.1.0");
        assert!(dependencies[0].get("dependsOn").is_none());
    }

    #[test]
    fn test_format_edges() {
        let root = cargo("app", "0.1.0");
        let serde = cargo("serde", "1.0.200");
        let derive = cargo("serde_derive", "1.0.200");
        let mut graph = DependencyGraph::new(root.clone());
        graph.add_dependency(root.clone(), serde.clone());
        graph.add_dependency(serde.clone(), derive.clone());
        graph.add_dependency(root, derive);

        let bom = render(&graph);

        let components = bom["components"].as_array().unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0]["bom-ref"], "pkg:cargo/serde@1.0.200");
        assert_eq!(components[0]["type"], "library");

        let dependencies = bom["dependencies"].as_array().unwrap();
        assert_eq!(dependencies.len(), 3);
        assert_eq!(
            dependencies[0]["dependsOn"],
            serde_json::json!(["pkg:cargo/serde@1.0.200", "pkg:cargo/serde_derive@1.0.200"])
        );
        assert_eq!(
            dependencies[1]["dependsOn"],
            serde_json::json!(["pkg:cargo/serde_derive@1.0.200"])
        );
        assert!(dependencies[2].get("dependsOn").is_none());
    }

    #[test]
    fn test_format_go_group() {
        let root = PackageCoordinate::new(Ecosystem::Golang, "service", "v0.0.0")
            .with_namespace("github.com/acme");
        let uuid = PackageCoordinate::new(Ecosystem::Golang, "uuid", "v1.6.0")
            .with_namespace("github.com/google");
        let mut graph = DependencyGraph::new(root.clone());
        graph.add_dependency(root, uuid);

        let bom = render(&graph);

        assert_eq!(bom["metadata"]["component"]["group"], "github.com/acme");
        assert_eq!(bom["components"][0]["group"], "github.com/google");
        assert_eq!(bom["components"][0]["purl"], "pkg:golang/github.com/google/uuid@v1.6.0");
    }
}
