
use js_sys::{Float32Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::config::HeroConfig;
use crate::error::{PageError, Result};
use crate::particles::{FrameUniforms, ParticleCloud};
use crate::viewport::Viewport;

const VERTEX_SHADER: &str = r#"#version 300 es
in vec3 a_position;
uniform mat4 u_model_view;
uniform mat4 u_projection;
uniform float u_size;
uniform float u_scale;

void main() {
    vec4 view_position = u_model_view * vec4(a_position, 1.0);
    // size attenuation: world-space size projected onto half the canvas height
    gl_PointSize = u_size * (u_scale / -view_position.z);
    gl_Position = u_projection * view_position;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
uniform vec4 u_color;
out vec4 out_color;

void main() {
    out_color = u_color;
}
"#;

/// Draws a static point cloud on a transparent WebGL2 canvas.
pub struct PointsRenderer {
    canvas: HtmlCanvasElement,
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    count: i32,
    u_model_view: WebGlUniformLocation,
    u_projection: WebGlUniformLocation,
    u_scale: WebGlUniformLocation,
}

impl PointsRenderer {
    pub fn new(canvas: HtmlCanvasElement, cloud: &ParticleCloud, config: &HeroConfig) -> Result<Self> {
        let options = Object::new();
        Reflect::set(&options, &"alpha".into(), &JsValue::TRUE)?;
        Reflect::set(&options, &"antialias".into(), &JsValue::TRUE)?;
        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &options)?
            .ok_or_else(|| PageError::Graphics("WebGL2 not supported".into()))?
            .dyn_into()
            .map_err(|_| PageError::Graphics("context is not WebGL2".into()))?;

        let vertex = compile_shader(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = compile_shader(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vertex, &fragment)?;

        // Positions never change after upload.
        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| PageError::Graphics("cannot create vertex array".into()))?;
        gl.bind_vertex_array(Some(&vao));
        let buffer = gl
            .create_buffer()
            .ok_or_else(|| PageError::Graphics("cannot create buffer".into()))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let positions = Float32Array::from(cloud.positions());
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &positions, GL::STATIC_DRAW);
        let location = gl.get_attrib_location(&program, "a_position");
        if location < 0 {
            return Err(PageError::Graphics("a_position not found".into()));
        }
        gl.enable_vertex_attrib_array(location as u32);
        gl.vertex_attrib_pointer_with_i32(location as u32, 3, GL::FLOAT, false, 0, 0);
        gl.bind_vertex_array(None);

        gl.use_program(Some(&program));
        let [r, g, b] = config.rgb();
        gl.uniform4f(
            Some(&uniform(&gl, &program, "u_color")?),
            r,
            g,
            b,
            config.opacity,
        );
        gl.uniform1f(Some(&uniform(&gl, &program, "u_size")?), config.point_size);

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        Ok(Self {
            u_model_view: uniform(&gl, &program, "u_model_view")?,
            u_projection: uniform(&gl, &program, "u_projection")?,
            u_scale: uniform(&gl, &program, "u_scale")?,
            count: cloud.len() as i32,
            canvas,
            gl,
            program,
            vao,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Resize the drawing buffer and GL viewport to `viewport`.
    pub fn set_size(&self, viewport: Viewport) {
        let (width, height) = (viewport.width as u32, viewport.height as u32);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    pub fn draw(&self, frame: &FrameUniforms, viewport: Viewport) {
        let gl = &self.gl;
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.use_program(Some(&self.program));
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.u_model_view),
            false,
            &frame.model_view.to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.u_projection),
            false,
            &frame.projection.to_cols_array(),
        );
        gl.uniform1f(Some(&self.u_scale), viewport.height / 2.0);
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::POINTS, 0, self.count);
        gl.bind_vertex_array(None);
    }
}

fn uniform(gl: &GL, program: &WebGlProgram, name: &str) -> Result<WebGlUniformLocation> {
    gl.get_uniform_location(program, name)
        .ok_or_else(|| PageError::Graphics(format!("uniform {name} not found")))
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| PageError::Graphics("cannot create shader".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(PageError::Graphics(format!("shader compile failed: {log}")))
    }
}

fn link_program(gl: &GL, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| PageError::Graphics("cannot create program".into()))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);
    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(PageError::Graphics(format!("program link failed: {log}")))
    }
}
