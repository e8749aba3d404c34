use std::sync::Arc;

use anyhow::Context as _;
use thiserror::Error;

/// Owner of the core wgpu objects shared by every part of the renderer.
///
/// `Instance` and `Adapter` stay plain values; `Device` and `Queue` are
/// `Arc`-wrapped because bind groups, buffers and passes all need clonable
/// access to them.
pub struct GpuContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("no suitable GPU adapter available")]
    AdapterUnavailable,
    #[error("device request failed: {0}")]
    DeviceRequest(String),
}

impl GpuContext {
    /// Creates a headless `GpuContext` (no surface) — the normal path for
    /// this renderer, which always draws into caller-supplied texture views.
    pub async fn new() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        Self::new_with_instance(instance, None).await
    }

    /// Creates a `GpuContext` from an existing `Instance`, optionally tied to
    /// a `Surface` so the selected adapter is guaranteed to be compatible
    /// with a window.
    pub async fn new_with_instance(
        instance: wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> anyhow::Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface,
                force_fallback_adapter: false,
            })
            .await
            .context(ContextError::AdapterUnavailable)?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?})", info.name, info.backend);
        // One feature per line, mirroring a driver extension dump.
        for (name, _) in adapter.features().iter_names() {
            log::info!("feature: {name}");
        }

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Crucible Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    ..Default::default()
                },
                None,
            )
            .await
            .map_err(|e| ContextError::DeviceRequest(e.to_string()))?;

        // GPU errors are never recoverable here: log the diagnostic, then die.
        device.on_uncaptured_error(Box::new(|error| {
            log::error!("uncaptured GPU error: {error}");
            panic!("uncaptured GPU error: {error}");
        }));

        Ok(Self {
            instance,
            adapter,
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }
}
