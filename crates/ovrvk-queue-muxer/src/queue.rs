//! Per-queue hooks. Virtual queues fold onto one real queue handle, so
//! submissions the application believes to be parallel can arrive on the
//! same handle from several threads at once; each forwarded call runs
//! under that handle's mutex to keep the driver's single-queue ordering
//! guarantees intact.

use std::sync::Arc;

use ash::vk;
use parking_lot::Mutex;
use tracing::trace;

use ovrvk_core::config;
use ovrvk_core::dispatch::{dispatch_key, raw_key};
use ovrvk_core::handle_map::HandleMap;

use crate::device::{DeviceRecord, DEVICES};

/// Registry of queue records, keyed by the raw queue handle value (every
/// queue of a device shares the device's dispatch key, so the dispatch
/// key cannot distinguish them).
pub(crate) static QUEUES: Mutex<HandleMap<Arc<QueueRecord>>> = Mutex::new(HandleMap::new());

pub(crate) struct QueueRecord {
    /// Dispatch key of the owning device's record.
    pub device_key: usize,
    /// Held across exactly one forwarded per-queue call.
    pub lock: Mutex<()>,
}

impl QueueRecord {
    pub(crate) fn new(device_key: usize) -> Self {
        Self {
            device_key,
            lock: Mutex::new(()),
        }
    }
}

/// Find the device record for a queue and its queue record, creating the
/// latter on first sight of the handle.
fn records_for(queue: vk::Queue) -> Option<(Arc<DeviceRecord>, Arc<QueueRecord>)> {
    let device_key = unsafe { dispatch_key(queue) };
    let device = DEVICES.lock().find(device_key).cloned()?;

    let mut queues = QUEUES.lock();
    let record = match queues.find(raw_key(queue)) {
        Some(record) => record.clone(),
        None => {
            let record = Arc::new(QueueRecord::new(device_key));
            queues.add(raw_key(queue), record.clone());
            record
        }
    };
    Some((device, record))
}

/// Layer's implementation of `vkQueueSubmit`.
pub unsafe extern "system" fn queue_submit(
    queue: vk::Queue,
    submit_count: u32,
    p_submits: *const vk::SubmitInfo<'_>,
    fence: vk::Fence,
) -> vk::Result {
    trace!("vkQueueSubmit called");

    let Some((device, record)) = records_for(queue) else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    let Some(next_queue_submit) = device.queue_submit else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    if !config::get().queue_muxer.enabled {
        return unsafe { next_queue_submit(queue, submit_count, p_submits, fence) };
    }

    let _queue_guard = record.lock.lock();
    unsafe { next_queue_submit(queue, submit_count, p_submits, fence) }
}

/// Layer's implementation of `vkQueueWaitIdle`.
pub unsafe extern "system" fn queue_wait_idle(queue: vk::Queue) -> vk::Result {
    trace!("vkQueueWaitIdle called");

    let Some((device, record)) = records_for(queue) else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    let Some(next_queue_wait_idle) = device.queue_wait_idle else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    if !config::get().queue_muxer.enabled {
        return unsafe { next_queue_wait_idle(queue) };
    }

    let _queue_guard = record.lock.lock();
    unsafe { next_queue_wait_idle(queue) }
}

/// Layer's implementation of `vkQueuePresentKHR`.
pub unsafe extern "system" fn queue_present_khr(
    queue: vk::Queue,
    p_present_info: *const vk::PresentInfoKHR<'_>,
) -> vk::Result {
    trace!("vkQueuePresentKHR called");

    let Some((device, record)) = records_for(queue) else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    let Some(next_queue_present_khr) = device.queue_present_khr else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    if !config::get().queue_muxer.enabled {
        return unsafe { next_queue_present_khr(queue, p_present_info) };
    }

    let _queue_guard = record.lock.lock();
    unsafe { next_queue_present_khr(queue, p_present_info) }
}

/// Layer's implementation of `vkQueueBindSparse`. Sparse binds are
/// queue-ordered work like any other submission; a folded virtual queue
/// can receive them, so they are serialised the same way.
pub unsafe extern "system" fn queue_bind_sparse(
    queue: vk::Queue,
    bind_info_count: u32,
    p_bind_info: *const vk::BindSparseInfo<'_>,
    fence: vk::Fence,
) -> vk::Result {
    trace!("vkQueueBindSparse called");

    let Some((device, record)) = records_for(queue) else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    let Some(next_queue_bind_sparse) = device.queue_bind_sparse else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    if !config::get().queue_muxer.enabled {
        return unsafe { next_queue_bind_sparse(queue, bind_info_count, p_bind_info, fence) };
    }

    let _queue_guard = record.lock.lock();
    unsafe { next_queue_bind_sparse(queue, bind_info_count, p_bind_info, fence) }
}
