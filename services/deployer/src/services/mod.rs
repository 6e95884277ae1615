pub mod build_kubernetes;
