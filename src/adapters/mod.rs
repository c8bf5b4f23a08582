pub mod local_sensor_context;
