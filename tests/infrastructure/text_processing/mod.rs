mod extractor_factory_test;
mod image_adapter_test;
mod page_cropper_test;
mod pdf_adapter_test;
