//! Integration tests: drive the layer hooks against a fake downstream
//! driver. The fake driver mints dispatchable handles the way a real one
//! does (first word is a dispatch-table address) and records what the
//! layer forwards to it.
//!
//! Run with: cargo test --test queue_muxer -- --nocapture

use std::ffi::{c_char, c_void, CStr};
use std::mem;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};
use std::thread;
use std::time::Duration;

use ash::vk;
use ash::vk::Handle;
use ovrvk_core::chain::{
    LayerDeviceCreateInfo, LayerDeviceCreateInfoUnion, LayerDeviceLink, LayerInstanceCreateInfo,
    LayerInstanceCreateInfoUnion, LayerInstanceLink, VK_LAYER_LINK_INFO,
};
use ovrvk_queue_muxer::{device, instance, queue, MIN_ADVERTISED_QUEUE_COUNT};

// ── Fake dispatchable handles ───────────────────────────────

/// The loader contract: the first pointer-sized word of a dispatchable
/// handle points at a dispatch table. The layer keys its records on that
/// word, so handles of one logical driver object group share it.
#[repr(C)]
struct FakeDispatchable {
    dispatch: usize,
    id: usize,
}

fn make_handle(dispatch: usize, id: usize) -> u64 {
    Box::leak(Box::new(FakeDispatchable { dispatch, id })) as *mut FakeDispatchable as u64
}

const INSTANCE_DISPATCH: usize = 0x1111_1000;
const DEVICE_DISPATCH: usize = 0x2222_2000;

const REAL_QUEUE_COUNT: u32 = 1;

// ── Fake driver state ───────────────────────────────────────

static DOWNSTREAM_CREATE_INSTANCE_CALLS: AtomicUsize = AtomicUsize::new(0);
static DOWNSTREAM_CREATE_DEVICE_CALLS: AtomicUsize = AtomicUsize::new(0);
static DOWNSTREAM_DESTROYS: AtomicUsize = AtomicUsize::new(0);
static FORWARDED_QUEUE_COUNTS: Mutex<Vec<u32>> = Mutex::new(Vec::new());
static FORWARDED_QUEUE_REQUESTS: Mutex<Vec<(u32, u32)>> = Mutex::new(Vec::new());
static SUBMITS_IN_FLIGHT: AtomicUsize = AtomicUsize::new(0);
static MAX_SUBMITS_IN_FLIGHT: AtomicUsize = AtomicUsize::new(0);

static QUEUE_HANDLE: OnceLock<u64> = OnceLock::new();

fn queue_handle() -> u64 {
    *QUEUE_HANDLE.get_or_init(|| make_handle(DEVICE_DISPATCH, 100))
}

/// Tests share the process-wide registries and fake-driver counters, so
/// the ones that touch them run one at a time.
static TEST_LOCK: Mutex<()> = Mutex::new(());

// ── Fake driver entry points ────────────────────────────────

unsafe extern "system" fn fake_create_instance(
    _p_create_info: *const vk::InstanceCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_instance: *mut vk::Instance,
) -> vk::Result {
    DOWNSTREAM_CREATE_INSTANCE_CALLS.fetch_add(1, Ordering::SeqCst);
    unsafe { *p_instance = vk::Instance::from_raw(make_handle(INSTANCE_DISPATCH, 1)) };
    vk::Result::SUCCESS
}

unsafe extern "system" fn fake_destroy_instance(
    _instance: vk::Instance,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    DOWNSTREAM_DESTROYS.fetch_add(1, Ordering::SeqCst);
}

unsafe extern "system" fn fake_get_physical_device_queue_family_properties(
    _physical_device: vk::PhysicalDevice,
    p_count: *mut u32,
    p_properties: *mut vk::QueueFamilyProperties,
) {
    if p_properties.is_null() {
        unsafe { *p_count = 1 };
        return;
    }
    if unsafe { *p_count } >= 1 {
        unsafe {
            *p_properties = vk::QueueFamilyProperties {
                queue_flags: vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE,
                queue_count: REAL_QUEUE_COUNT,
                timestamp_valid_bits: 64,
                min_image_transfer_granularity: vk::Extent3D {
                    width: 1,
                    height: 1,
                    depth: 1,
                },
            };
            *p_count = 1;
        }
    }
}

unsafe extern "system" fn fake_get_physical_device_queue_family_properties2(
    physical_device: vk::PhysicalDevice,
    p_count: *mut u32,
    p_properties: *mut vk::QueueFamilyProperties2<'_>,
) {
    if p_properties.is_null() {
        unsafe { *p_count = 1 };
        return;
    }
    if unsafe { *p_count } >= 1 {
        unsafe {
            fake_get_physical_device_queue_family_properties(
                physical_device,
                p_count,
                &mut (*p_properties).queue_family_properties,
            );
        }
    }
}

unsafe extern "system" fn fake_create_device(
    _physical_device: vk::PhysicalDevice,
    p_create_info: *const vk::DeviceCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_device: *mut vk::Device,
) -> vk::Result {
    DOWNSTREAM_CREATE_DEVICE_CALLS.fetch_add(1, Ordering::SeqCst);
    let create_info = unsafe { &*p_create_info };
    let queue_infos = unsafe {
        std::slice::from_raw_parts(
            create_info.p_queue_create_infos,
            create_info.queue_create_info_count as usize,
        )
    };
    *FORWARDED_QUEUE_COUNTS.lock().expect("lock") =
        queue_infos.iter().map(|info| info.queue_count).collect();
    unsafe { *p_device = vk::Device::from_raw(make_handle(DEVICE_DISPATCH, 1)) };
    vk::Result::SUCCESS
}

unsafe extern "system" fn fake_destroy_device(
    _device: vk::Device,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    DOWNSTREAM_DESTROYS.fetch_add(1, Ordering::SeqCst);
}

unsafe extern "system" fn fake_get_device_queue(
    _device: vk::Device,
    queue_family_index: u32,
    queue_index: u32,
    p_queue: *mut vk::Queue,
) {
    FORWARDED_QUEUE_REQUESTS
        .lock()
        .expect("lock")
        .push((queue_family_index, queue_index));
    // A real driver hands out one handle per physical queue; index 0 is
    // the only physical queue this fake exposes.
    unsafe { *p_queue = vk::Queue::from_raw(queue_handle()) };
}

unsafe extern "system" fn fake_get_device_queue2(
    device: vk::Device,
    p_queue_info: *const vk::DeviceQueueInfo2<'_>,
    p_queue: *mut vk::Queue,
) {
    let queue_info = unsafe { &*p_queue_info };
    unsafe {
        fake_get_device_queue(
            device,
            queue_info.queue_family_index,
            queue_info.queue_index,
            p_queue,
        )
    };
}

unsafe extern "system" fn fake_queue_submit(
    _queue: vk::Queue,
    _submit_count: u32,
    _p_submits: *const vk::SubmitInfo<'_>,
    _fence: vk::Fence,
) -> vk::Result {
    let in_flight = SUBMITS_IN_FLIGHT.fetch_add(1, Ordering::SeqCst) + 1;
    MAX_SUBMITS_IN_FLIGHT.fetch_max(in_flight, Ordering::SeqCst);
    thread::sleep(Duration::from_millis(25));
    SUBMITS_IN_FLIGHT.fetch_sub(1, Ordering::SeqCst);
    vk::Result::SUCCESS
}

unsafe extern "system" fn fake_queue_wait_idle(_queue: vk::Queue) -> vk::Result {
    vk::Result::SUCCESS
}

unsafe extern "system" fn fake_get_instance_proc_addr(
    _instance: vk::Instance,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    let name = unsafe { CStr::from_ptr(p_name) }.to_str().ok()?;
    match name {
        "vkCreateInstance" => {
            Some(unsafe { mem::transmute(fake_create_instance as *const ()) })
        }
        "vkDestroyInstance" => {
            Some(unsafe { mem::transmute(fake_destroy_instance as *const ()) })
        }
        "vkCreateDevice" => Some(unsafe { mem::transmute(fake_create_device as *const ()) }),
        "vkGetPhysicalDeviceQueueFamilyProperties" => Some(unsafe {
            mem::transmute(fake_get_physical_device_queue_family_properties as *const ())
        }),
        "vkGetPhysicalDeviceQueueFamilyProperties2" => Some(unsafe {
            mem::transmute(fake_get_physical_device_queue_family_properties2 as *const ())
        }),
        _ => None,
    }
}

unsafe extern "system" fn fake_get_device_proc_addr(
    _device: vk::Device,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    let name = unsafe { CStr::from_ptr(p_name) }.to_str().ok()?;
    match name {
        "vkDestroyDevice" => Some(unsafe { mem::transmute(fake_destroy_device as *const ()) }),
        "vkGetDeviceQueue" => {
            Some(unsafe { mem::transmute(fake_get_device_queue as *const ()) })
        }
        "vkGetDeviceQueue2" => {
            Some(unsafe { mem::transmute(fake_get_device_queue2 as *const ()) })
        }
        "vkQueueSubmit" => Some(unsafe { mem::transmute(fake_queue_submit as *const ()) }),
        "vkQueueWaitIdle" => Some(unsafe { mem::transmute(fake_queue_wait_idle as *const ()) }),
        _ => None,
    }
}

// ── Chain scaffolding ───────────────────────────────────────

fn create_layered_instance() -> vk::Instance {
    let mut link = LayerInstanceLink {
        p_next: ptr::null_mut(),
        pfn_next_get_instance_proc_addr: Some(fake_get_instance_proc_addr),
        pfn_next_get_physical_device_proc_addr: None,
    };
    let mut node = LayerInstanceCreateInfo {
        s_type: vk::StructureType::LOADER_INSTANCE_CREATE_INFO,
        p_next: ptr::null_mut(),
        function: VK_LAYER_LINK_INFO,
        u: LayerInstanceCreateInfoUnion {
            p_layer_info: &mut link,
        },
    };
    let create_info = vk::InstanceCreateInfo {
        p_next: &mut node as *mut LayerInstanceCreateInfo as *const c_void,
        ..Default::default()
    };

    let mut raw_instance = vk::Instance::null();
    let res = unsafe { instance::create_instance(&create_info, ptr::null(), &mut raw_instance) };
    assert_eq!(res, vk::Result::SUCCESS);
    assert_ne!(raw_instance, vk::Instance::null());
    raw_instance
}

fn create_layered_device(
    physical_device: vk::PhysicalDevice,
    requested_queue_count: u32,
) -> vk::Device {
    let priorities = vec![1.0f32; requested_queue_count as usize];
    let queue_info = vk::DeviceQueueCreateInfo {
        queue_family_index: 0,
        queue_count: requested_queue_count,
        p_queue_priorities: priorities.as_ptr(),
        ..Default::default()
    };

    let mut link = LayerDeviceLink {
        p_next: ptr::null_mut(),
        pfn_next_get_instance_proc_addr: Some(fake_get_instance_proc_addr),
        pfn_next_get_device_proc_addr: Some(fake_get_device_proc_addr),
    };
    let mut node = LayerDeviceCreateInfo {
        s_type: vk::StructureType::LOADER_DEVICE_CREATE_INFO,
        p_next: ptr::null_mut(),
        function: VK_LAYER_LINK_INFO,
        u: LayerDeviceCreateInfoUnion {
            p_layer_info: &mut link,
        },
    };
    let create_info = vk::DeviceCreateInfo {
        p_next: &mut node as *mut LayerDeviceCreateInfo as *const c_void,
        queue_create_info_count: 1,
        p_queue_create_infos: &queue_info,
        ..Default::default()
    };

    let mut raw_device = vk::Device::null();
    let res = unsafe {
        device::create_device(physical_device, &create_info, ptr::null(), &mut raw_device)
    };
    assert_eq!(res, vk::Result::SUCCESS);
    assert_ne!(raw_device, vk::Device::null());
    raw_device
}

// ── Tests ───────────────────────────────────────────────────

/// The whole virtualisation flow in driver order: inflate, clamp, fold,
/// serialise, tear down. Sequential because the hooks share process-wide
/// registries keyed by the fake dispatch words above.
#[test]
fn queue_virtualisation_end_to_end() {
    let _guard = TEST_LOCK.lock().expect("test lock");

    let raw_instance = create_layered_instance();
    let physical_device = vk::PhysicalDevice::from_raw(make_handle(INSTANCE_DISPATCH, 2));

    // Count query passes through: the family count is not inflated.
    let mut count = 0u32;
    unsafe {
        instance::get_physical_device_queue_family_properties(
            physical_device,
            &mut count,
            ptr::null_mut(),
        )
    };
    assert_eq!(count, 1);

    // Array query: the driver's 1 queue is advertised as 16, everything
    // else in the family record passes through untouched.
    let mut families = vec![vk::QueueFamilyProperties::default(); count as usize];
    unsafe {
        instance::get_physical_device_queue_family_properties(
            physical_device,
            &mut count,
            families.as_mut_ptr(),
        )
    };
    assert_eq!(families[0].queue_count, MIN_ADVERTISED_QUEUE_COUNT);
    assert_eq!(families[0].timestamp_valid_bits, 64);
    assert!(families[0].queue_flags.contains(vk::QueueFlags::GRAPHICS));

    // The structure-2 path advertises the same counts.
    let mut families2 = vec![vk::QueueFamilyProperties2::default(); count as usize];
    unsafe {
        instance::get_physical_device_queue_family_properties2(
            physical_device,
            &mut count,
            families2.as_mut_ptr(),
        )
    };
    assert_eq!(
        families2[0].queue_family_properties.queue_count,
        MIN_ADVERTISED_QUEUE_COUNT
    );

    // A malformed device chain fails before any downstream call.
    let bare_info = vk::DeviceCreateInfo::default();
    let mut no_device = vk::Device::null();
    let res = unsafe {
        device::create_device(physical_device, &bare_info, ptr::null(), &mut no_device)
    };
    assert_eq!(res, vk::Result::ERROR_INITIALIZATION_FAILED);
    assert_eq!(DOWNSTREAM_CREATE_DEVICE_CALLS.load(Ordering::SeqCst), 0);

    // The application asks for 4 queues; the driver is asked for 1.
    let raw_device = create_layered_device(physical_device, 4);
    assert_eq!(
        *FORWARDED_QUEUE_COUNTS.lock().expect("lock"),
        vec![REAL_QUEUE_COUNT]
    );

    // Virtual index 3 folds onto physical index 0 and yields the same
    // handle the physical index does.
    let mut virtual_queue = vk::Queue::null();
    unsafe { device::get_device_queue(raw_device, 0, 3, &mut virtual_queue) };
    let mut physical_queue = vk::Queue::null();
    unsafe { device::get_device_queue(raw_device, 0, 0, &mut physical_queue) };
    assert_eq!(virtual_queue, physical_queue);
    assert_eq!(
        *FORWARDED_QUEUE_REQUESTS.lock().expect("lock"),
        vec![(0, 0), (0, 0)]
    );

    // The structure-based retrieval path folds the same way.
    let queue_info = vk::DeviceQueueInfo2 {
        queue_family_index: 0,
        queue_index: 9,
        ..Default::default()
    };
    let mut structured_queue = vk::Queue::null();
    unsafe { device::get_device_queue2(raw_device, &queue_info, &mut structured_queue) };
    assert_eq!(structured_queue, physical_queue);

    // Two threads submit "in parallel" on queues that fold to the same
    // real queue; the driver must never see both at once.
    let submitter = |queue: vk::Queue| {
        move || {
            for _ in 0..4 {
                let res =
                    unsafe { queue::queue_submit(queue, 0, ptr::null(), vk::Fence::null()) };
                assert_eq!(res, vk::Result::SUCCESS);
            }
        }
    };
    let first = thread::spawn(submitter(virtual_queue));
    let second = thread::spawn(submitter(physical_queue));
    first.join().expect("join");
    second.join().expect("join");
    assert_eq!(MAX_SUBMITS_IN_FLIGHT.load(Ordering::SeqCst), 1);

    let res = unsafe { queue::queue_wait_idle(physical_queue) };
    assert_eq!(res, vk::Result::SUCCESS);

    // Teardown forwards downstream and purges the records; hooks on the
    // dead handles become no-ops rather than touching stale state.
    unsafe { device::destroy_device(raw_device, ptr::null()) };
    let res = unsafe { queue::queue_submit(physical_queue, 0, ptr::null(), vk::Fence::null()) };
    assert_eq!(res, vk::Result::ERROR_INITIALIZATION_FAILED);

    unsafe { instance::destroy_instance(raw_instance, ptr::null()) };
    assert_eq!(DOWNSTREAM_DESTROYS.load(Ordering::SeqCst), 2);
}

#[test]
fn create_instance_without_chain_info_fails_clean() {
    let _guard = TEST_LOCK.lock().expect("test lock");

    let downstream_calls_before = DOWNSTREAM_CREATE_INSTANCE_CALLS.load(Ordering::SeqCst);
    let create_info = vk::InstanceCreateInfo::default();
    let mut raw_instance = vk::Instance::null();
    let res = unsafe { instance::create_instance(&create_info, ptr::null(), &mut raw_instance) };
    assert_eq!(res, vk::Result::ERROR_INITIALIZATION_FAILED);
    assert_eq!(raw_instance, vk::Instance::null());
    assert_eq!(
        DOWNSTREAM_CREATE_INSTANCE_CALLS.load(Ordering::SeqCst),
        downstream_calls_before
    );
}

#[test]
fn enumeration_reports_the_layer() {
    let mut count = 0u32;
    let res = unsafe {
        ovrvk_queue_muxer::vkEnumerateInstanceLayerProperties(&mut count, ptr::null_mut())
    };
    assert_eq!(res, vk::Result::SUCCESS);
    assert_eq!(count, 1);

    let mut properties = vk::LayerProperties::default();
    let res = unsafe {
        ovrvk_queue_muxer::vkEnumerateInstanceLayerProperties(&mut count, &mut properties)
    };
    assert_eq!(res, vk::Result::SUCCESS);
    let name = unsafe { CStr::from_ptr(properties.layer_name.as_ptr()) };
    assert_eq!(name.to_str().expect("utf8"), "VK_LAYER_OCULUS_queue_muxer");

    let mut ext_count = 7u32;
    let res = unsafe {
        ovrvk_queue_muxer::vkEnumerateInstanceExtensionProperties(
            ptr::null(),
            &mut ext_count,
            ptr::null_mut(),
        )
    };
    assert_eq!(res, vk::Result::SUCCESS);
    assert_eq!(ext_count, 0);
}

#[test]
fn proc_addr_serves_hooks_and_rejects_unknown_names() {
    let hooked = unsafe {
        ovrvk_queue_muxer::vkGetInstanceProcAddr(
            vk::Instance::null(),
            c"vkCreateInstance".as_ptr(),
        )
    };
    assert!(hooked.is_some());

    // Unknown names with no instance cannot be forwarded anywhere.
    let unknown = unsafe {
        ovrvk_queue_muxer::vkGetInstanceProcAddr(
            vk::Instance::null(),
            c"vkNotARealEntryPoint".as_ptr(),
        )
    };
    assert!(unknown.is_none());
}
