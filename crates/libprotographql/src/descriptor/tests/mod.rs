mod descriptor_graph_tests;
mod proto_file_tests;
