use serde::{Deserialize, Serialize};

/// Runtime stack identifier for a scaffolded project.
///
/// This is a closed set: deserializing an unknown id is an error, and
/// `JavaCentOs` is the universal fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackId {
    #[serde(rename = "node-js")]
    NodeJs,
    #[serde(rename = "spring-boot")]
    SpringBoot,
    #[serde(rename = "wildfly-swarm")]
    WildFlySwarm,
    #[serde(rename = "vertx")]
    Vertx,
    #[serde(rename = "java-centos")]
    JavaCentOs,
}

impl Default for StackId {
    fn default() -> Self {
        Self::JavaCentOs
    }
}

impl StackId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NodeJs => "NodeJS",
            Self::SpringBoot => "Spring Boot",
            Self::WildFlySwarm => "WildFly Swarm",
            Self::Vertx => "Vert.x",
            Self::JavaCentOs => "Java CentOS",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NodeJS" | "node-js" => Some(Self::NodeJs),
            "Spring Boot" | "spring-boot" => Some(Self::SpringBoot),
            "WildFly Swarm" | "wildfly-swarm" => Some(Self::WildFlySwarm),
            "Vert.x" | "vertx" => Some(Self::Vertx),
            "Java CentOS" | "java-centos" => Some(Self::JavaCentOs),
            _ => None,
        }
    }

    pub fn all_variants() -> &'static [Self] {
        &[
            Self::NodeJs,
            Self::SpringBoot,
            Self::WildFlySwarm,
            Self::Vertx,
            Self::JavaCentOs,
        ]
    }
}
