use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::commands::list::ListOptions;
use crate::commands::merge::MergeOptions;
use crate::commands::split::SplitOptions;
use crate::commands::{info, list, merge, split};

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfListRequest {
    #[schemars(description = "Directory to search (default: the server's working directory)")]
    #[serde(default)]
    pub dir: Option<String>,
    #[schemars(description = "Descend into subdirectories (default: false)")]
    #[serde(default)]
    pub recursive: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfSplitRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Page numbers or ranges (e.g., '6-8' or '1,3,5-8')")]
    pub pages: String,
    #[schemars(
        description = "Output file path, relative to the source's directory (default: <source>_split.pdf)"
    )]
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfMergeRequest {
    #[schemars(description = "PDF files to merge, in order (at least two)")]
    pub inputs: Vec<String>,
    #[schemars(description = "Output file path (default: merged.pdf)")]
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PdfServer {
    cwd: PathBuf,
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PdfServer {
    /// `cwd` resolves relative paths in merge and list requests.
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl PdfServer {
    #[tool(description = "Get the page count and PDF version of a file")]
    fn pdf_info(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        to_json(info::execute(&self.cwd.join(path)))
    }

    #[tool(description = "List PDF files in a directory with their page counts")]
    fn pdf_list(&self, Parameters(req): Parameters<PdfListRequest>) -> String {
        let options = ListOptions {
            dir: req
                .dir
                .map(|dir| self.cwd.join(dir))
                .unwrap_or_else(|| self.cwd.clone()),
            recursive: req.recursive,
        };
        to_json(list::execute(&options))
    }

    #[tool(description = "Extract specific pages from a PDF and save them to a new file. Use page range syntax like '1,3,5-8'.")]
    fn pdf_split(&self, Parameters(req): Parameters<PdfSplitRequest>) -> String {
        let options = SplitOptions {
            input: self.cwd.join(req.path),
            pages: req.pages,
            output: req.output.map(PathBuf::from),
        };
        to_json(split::execute(&options).map(|report| SplitResult {
            output_path: report.output.display().to_string(),
            page_count: report.page_count,
        }))
    }

    #[tool(description = "Merge multiple PDFs, in the given order, into a single file")]
    fn pdf_merge(&self, Parameters(req): Parameters<PdfMergeRequest>) -> String {
        let options = MergeOptions {
            inputs: req.inputs.into_iter().map(PathBuf::from).collect(),
            output: req.output.map(PathBuf::from),
        };
        to_json(merge::execute(&options, &self.cwd).map(|report| MergeResult {
            output_path: report.output.display().to_string(),
            file_count: report.file_count,
            page_count: report.page_count,
        }))
    }
}

fn to_json<T: Serialize>(result: Result<T>) -> String {
    match result {
        Ok(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|e| format!("Error: {}", e))
        }
        Err(e) => format!("Error: {:#}", e),
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SplitResult {
    pub output_path: String,
    pub page_count: usize,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MergeResult {
    pub output_path: String,
    pub file_count: usize,
    pub page_count: u32,
}

impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF split and merge tools. Use pdf_list to find PDFs, pdf_info for page counts, \
                 pdf_split to extract pages into a new PDF, and pdf_merge to concatenate PDFs."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server(cwd: PathBuf) -> Result<()> {
    log::info!("starting MCP server in {}", cwd.display());
    let server = PdfServer::new(cwd);

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
