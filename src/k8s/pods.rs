//! Pod listing through the typed API client

use anyhow::{Context, Result};
use k8s_openapi::api::core::v1::{Container, Pod};
use kube::api::{Api, ListParams};
use kube::Client;
use std::fmt;

/// Name and image of one container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerImage {
    pub name: String,
    pub image: String,
}

/// What `--list-pods` prints for a single pod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodSummary {
    pub name: String,
    pub namespace: String,
    pub init_containers: Vec<ContainerImage>,
    pub containers: Vec<ContainerImage>,
}

impl From<&Container> for ContainerImage {
    fn from(c: &Container) -> Self {
        Self {
            name: c.name.clone(),
            image: c.image.clone().unwrap_or_default(),
        }
    }
}

impl From<&Pod> for PodSummary {
    fn from(pod: &Pod) -> Self {
        let spec = pod.spec.as_ref();

        Self {
            name: pod.metadata.name.clone().unwrap_or_default(),
            namespace: pod.metadata.namespace.clone().unwrap_or_default(),
            init_containers: spec
                .and_then(|s| s.init_containers.as_ref())
                .map(|cs| cs.iter().map(ContainerImage::from).collect())
                .unwrap_or_default(),
            containers: spec
                .map(|s| s.containers.iter().map(ContainerImage::from).collect())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for PodSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pod: {}, Namespace: {}", self.name, self.namespace)?;
        writeln!(f, "Init Containers:")?;
        for c in &self.init_containers {
            writeln!(f, "  Name: {}, Image: {}", c.name, c.image)?;
        }
        writeln!(f, "Containers:")?;
        for c in &self.containers {
            writeln!(f, "  Name: {}, Image: {}", c.name, c.image)?;
        }
        Ok(())
    }
}

/// List every pod in `namespace` with one unfiltered request
pub async fn list_pods(client: Client, namespace: &str) -> Result<Vec<Pod>> {
    let api: Api<Pod> = Api::namespaced(client, namespace);

    let pods = api
        .list(&ListParams::default())
        .await
        .with_context(|| format!("Failed to list pods in namespace {}", namespace))?;

    crate::log_info!("Found {} pods in namespace {}", pods.items.len(), namespace);
    Ok(pods.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::PodSpec;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn container(name: &str, image: Option<&str>) -> Container {
        Container {
            name: name.to_string(),
            image: image.map(str::to_string),
            ..Default::default()
        }
    }

    fn pod(init: Option<Vec<Container>>, containers: Vec<Container>) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some("web-0".to_string()),
                namespace: Some("apps".to_string()),
                ..Default::default()
            },
            spec: Some(PodSpec {
                init_containers: init,
                containers,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_keeps_api_order() {
        let p = pod(
            Some(vec![container("migrate", Some("busybox:1.36"))]),
            vec![
                container("web", Some("nginx:1.27")),
                container("sidecar", Some("envoy:v1")),
            ],
        );

        let summary = PodSummary::from(&p);
        assert_eq!(summary.name, "web-0");
        assert_eq!(summary.namespace, "apps");
        assert_eq!(summary.init_containers.len(), 1);
        assert_eq!(summary.containers[0].name, "web");
        assert_eq!(summary.containers[1].image, "envoy:v1");
    }

    #[test]
    fn test_summary_display() {
        let p = pod(
            Some(vec![container("migrate", Some("busybox:1.36"))]),
            vec![container("web", Some("nginx:1.27"))],
        );

        let expected = "Pod: web-0, Namespace: apps\n\
                        Init Containers:\n  Name: migrate, Image: busybox:1.36\n\
                        Containers:\n  Name: web, Image: nginx:1.27\n";
        assert_eq!(PodSummary::from(&p).to_string(), expected);
    }

    #[test]
    fn test_summary_without_init_containers() {
        let p = pod(None, vec![container("web", None)]);

        let expected = "Pod: web-0, Namespace: apps\n\
                        Init Containers:\n\
                        Containers:\n  Name: web, Image: \n";
        assert_eq!(PodSummary::from(&p).to_string(), expected);
    }

    #[test]
    fn test_summary_without_spec() {
        let p = Pod::default();
        let summary = PodSummary::from(&p);
        assert!(summary.containers.is_empty());
        assert_eq!(summary.to_string(), "Pod: , Namespace: \nInit Containers:\nContainers:\n");
    }
}
