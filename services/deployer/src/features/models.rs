use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::ObjectMeta;

pub const APP_NAME: &str = "monitor-dashboard";
pub const NAMESPACE: &str = "default";
pub const IMAGE: &str = "123456789012.dkr.ecr.us-east-1.amazonaws.com/monitor-dashboard:latest";
pub const CONTAINER_PORT: i32 = 8001;
pub const REPLICAS: i32 = 1;

fn labels() -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert("app".to_string(), APP_NAME.to_string());
    labels
}

/// Single-replica Deployment running the dashboard image.
pub fn dashboard_deployment() -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(APP_NAME.to_string()),
            namespace: Some(NAMESPACE.to_string()),
            labels: Some(labels()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(REPLICAS),
            selector: LabelSelector {
                match_labels: Some(labels()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: "dashboard".to_string(),
                        image: Some(IMAGE.to_string()),
                        ports: Some(vec![ContainerPort {
                            container_port: CONTAINER_PORT,
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Service exposing the dashboard pods on the container port.
pub fn dashboard_service() -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(APP_NAME.to_string()),
            namespace: Some(NAMESPACE.to_string()),
            labels: Some(labels()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            selector: Some(labels()),
            ports: Some(vec![ServicePort {
                port: CONTAINER_PORT,
                target_port: Some(IntOrString::Int(CONTAINER_PORT)),
                protocol: Some("TCP".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_carries_the_fixed_workload_literals() {
        let deployment = dashboard_deployment();

        assert_eq!(deployment.metadata.name.as_deref(), Some(APP_NAME));
        assert_eq!(deployment.metadata.namespace.as_deref(), Some(NAMESPACE));

        let spec = deployment.spec.unwrap();
        assert_eq!(spec.replicas, Some(REPLICAS));
        assert_eq!(spec.selector.match_labels, Some(labels()));

        let pod_spec = spec.template.spec.unwrap();
        assert_eq!(pod_spec.containers.len(), 1);
        let container = &pod_spec.containers[0];
        assert_eq!(container.image.as_deref(), Some(IMAGE));
        assert_eq!(
            container.ports.as_ref().unwrap()[0].container_port,
            CONTAINER_PORT
        );
    }

    #[test]
    fn service_selects_the_deployment_pods() {
        let deployment = dashboard_deployment();
        let service = dashboard_service();

        let service_spec = service.spec.unwrap();
        let selector = service_spec.selector.clone().unwrap();
        let pod_labels = deployment
            .spec
            .unwrap()
            .template
            .metadata
            .unwrap()
            .labels
            .unwrap();
        assert_eq!(selector, pod_labels);

        let ports = service_spec.ports.unwrap();
        assert_eq!(ports[0].port, CONTAINER_PORT);
        assert_eq!(ports[0].target_port, Some(IntOrString::Int(CONTAINER_PORT)));
    }
}
