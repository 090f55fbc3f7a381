mod text_processing;
