//! Layer self-description for the loader's enumeration calls.

use std::os::raw::c_char;

use ash::vk;

/// Static identity of one layer: what the enumeration entry points report.
pub struct LayerMetadata {
    pub name: &'static str,
    pub spec_version: u32,
    pub implementation_version: u32,
    pub description: &'static str,
}

impl LayerMetadata {
    /// Fill the caller's array with this layer's single
    /// `VkLayerProperties`, following the count/array query protocol.
    ///
    /// # Safety
    /// `p_count` must be valid; `p_properties` must be null or point to
    /// `*p_count` writable elements.
    pub unsafe fn write_layer_properties(
        &self,
        p_count: *mut u32,
        p_properties: *mut vk::LayerProperties,
    ) -> vk::Result {
        if p_count.is_null() {
            return vk::Result::ERROR_INITIALIZATION_FAILED;
        }
        if p_properties.is_null() {
            unsafe { *p_count = 1 };
            return vk::Result::SUCCESS;
        }
        if unsafe { *p_count } < 1 {
            unsafe { *p_count = 0 };
            return vk::Result::INCOMPLETE;
        }

        let props = unsafe { &mut *p_properties };
        *props = vk::LayerProperties::default();
        write_c_string(&mut props.layer_name, self.name);
        write_c_string(&mut props.description, self.description);
        props.spec_version = self.spec_version;
        props.implementation_version = self.implementation_version;
        unsafe { *p_count = 1 };
        vk::Result::SUCCESS
    }
}

/// The layers add no extensions; report an empty set.
///
/// # Safety
/// `p_count` must be valid.
pub unsafe fn write_no_extension_properties(
    p_count: *mut u32,
    _p_properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    if p_count.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    unsafe { *p_count = 0 };
    vk::Result::SUCCESS
}

fn write_c_string(dst: &mut [c_char], src: &str) {
    let bytes = src.as_bytes();
    let len = std::cmp::min(bytes.len(), dst.len() - 1);
    for i in 0..len {
        dst[i] = bytes[i] as c_char;
    }
    dst[len] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    const META: LayerMetadata = LayerMetadata {
        name: "VK_LAYER_TEST_example",
        spec_version: vk::API_VERSION_1_0,
        implementation_version: 1,
        description: "example layer",
    };

    #[test]
    fn count_query_then_array_query() {
        let mut count = 0u32;
        let res = unsafe { META.write_layer_properties(&mut count, std::ptr::null_mut()) };
        assert_eq!(res, vk::Result::SUCCESS);
        assert_eq!(count, 1);

        let mut props = vk::LayerProperties::default();
        let res = unsafe { META.write_layer_properties(&mut count, &mut props) };
        assert_eq!(res, vk::Result::SUCCESS);
        let name = unsafe { CStr::from_ptr(props.layer_name.as_ptr()) };
        assert_eq!(name.to_str().expect("utf8"), "VK_LAYER_TEST_example");
        assert_eq!(props.implementation_version, 1);
    }

    #[test]
    fn zero_sized_array_is_incomplete() {
        let mut count = 0u32;
        let mut props = vk::LayerProperties::default();
        let res = unsafe { META.write_layer_properties(&mut count, &mut props) };
        assert_eq!(res, vk::Result::INCOMPLETE);
        assert_eq!(count, 0);
    }

    #[test]
    fn no_extensions_reported() {
        let mut count = 42u32;
        let res = unsafe { write_no_extension_properties(&mut count, std::ptr::null_mut()) };
        assert_eq!(res, vk::Result::SUCCESS);
        assert_eq!(count, 0);
    }
}
